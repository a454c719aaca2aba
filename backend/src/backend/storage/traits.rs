//! # Storage Traits
//!
//! Storage abstraction traits so the domain layer can work with different
//! backends (per-directory YAML/CSV files today, anything else tomorrow)
//! without modification.

use anyhow::Result;

use crate::backend::domain::models::display_image::DisplayImage;
use crate::backend::domain::models::profile::UserProfile;

/// Interface for profile storage operations.
pub trait ProfileStorage: Send + Sync {
    /// Store a new profile
    fn store_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Retrieve a profile by username
    fn get_profile(&self, username: &str) -> Result<Option<UserProfile>>;

    /// List all profiles ordered by first name, middle names, last name
    fn list_profiles(&self) -> Result<Vec<UserProfile>>;

    /// Update an existing profile
    fn update_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Delete a profile and everything stored under it.
    /// Returns true if the profile existed.
    fn delete_profile(&self, username: &str) -> Result<bool>;
}

/// Interface for display-image record storage operations.
pub trait DisplayImageStorage: Send + Sync {
    /// Store a new image record
    fn store_image(&self, image: &DisplayImage) -> Result<()>;

    /// Retrieve a specific image record
    fn get_image(&self, username: &str, image_id: &str) -> Result<Option<DisplayImage>>;

    /// List a user's image records, oldest first
    fn list_images(&self, username: &str) -> Result<Vec<DisplayImage>>;

    /// Delete an image record. Returns true if it was found and deleted.
    fn delete_image(&self, username: &str, image_id: &str) -> Result<bool>;
}
