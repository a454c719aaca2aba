//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined
//! in the `shared` crate to these internal types.

pub mod profiles {
    use chrono::NaiveDate;

    use crate::backend::domain::age::{AgeDelta, BirthdayProximity};
    use crate::backend::domain::models::profile::{Gender, UserProfile, Website};

    /// Input for creating a new profile.
    #[derive(Debug, Clone)]
    pub struct CreateProfileCommand {
        pub username: String,
        pub first_name: String,
        pub middle_names: String,
        pub last_name: String,
        pub email: String,
        pub national_id: String,
        pub gender: Gender,
        pub address: String,
        pub postal_code: String,
        pub phone: String,
        pub mobile: String,
        pub homepages: Vec<Website>,
    }

    /// Input for updating a profile; only provided fields change.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateProfileCommand {
        pub username: String,
        pub first_name: Option<String>,
        pub middle_names: Option<String>,
        pub last_name: Option<String>,
        pub email: Option<String>,
        pub national_id: Option<String>,
        pub gender: Option<Gender>,
        pub address: Option<String>,
        pub postal_code: Option<String>,
        pub phone: Option<String>,
        pub mobile: Option<String>,
        pub homepages: Option<Vec<Website>>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateProfileResult {
        pub profile: UserProfile,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateProfileResult {
        pub profile: UserProfile,
    }

    #[derive(Debug, Clone)]
    pub struct GetProfileResult {
        pub profile: Option<UserProfile>,
    }

    #[derive(Debug, Clone)]
    pub struct ListProfilesResult {
        pub profiles: Vec<UserProfile>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteProfileResult {
        pub success_message: String,
    }

    /// Query for age and birthday lookups. The reference date defaults to
    /// today when not provided.
    #[derive(Debug, Clone, Default)]
    pub struct AgeQuery {
        pub username: String,
        pub reference_date: Option<NaiveDate>,
    }

    /// Result of an age lookup; `None` when the profile has no national
    /// identity number on record.
    #[derive(Debug, Clone)]
    pub struct AgeResult {
        pub age: Option<ComputedAge>,
    }

    #[derive(Debug, Clone)]
    pub struct ComputedAge {
        pub birth_date: NaiveDate,
        pub delta: AgeDelta,
    }

    /// Result of a birthday lookup; `None` when the profile has no national
    /// identity number on record.
    #[derive(Debug, Clone)]
    pub struct BirthdayResult {
        pub birthday: Option<ComputedBirthday>,
    }

    #[derive(Debug, Clone)]
    pub struct ComputedBirthday {
        pub closest_birthday: NaiveDate,
        pub proximity: BirthdayProximity,
    }
}

pub mod images {
    use crate::backend::domain::display_image::ImageLocation;
    use crate::backend::domain::models::display_image::DisplayImage;

    /// Input for recording a newly uploaded photo.
    #[derive(Debug, Clone)]
    pub struct AddImageCommand {
        pub username: String,
        pub filename: String,
    }

    #[derive(Debug, Clone)]
    pub struct AddImageResult {
        pub image: DisplayImage,
        pub locations: Vec<(String, ImageLocation)>,
    }

    #[derive(Debug, Clone)]
    pub struct ListImagesResult {
        pub images: Vec<DisplayImage>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteImageResult {
        pub success_message: String,
    }

    /// A picked display image with its resolved size variants. Falls back to
    /// the configured default image when the user has no photos.
    #[derive(Debug, Clone)]
    pub struct DisplayImageResult {
        pub filename: String,
        pub is_default: bool,
        pub locations: Vec<(String, ImageLocation)>,
    }
}

pub mod passwords {
    /// Input for resetting a user's password.
    #[derive(Debug, Clone)]
    pub struct ResetPasswordCommand {
        pub username: String,
    }

    /// Result of a password reset. The generated password is handed back so
    /// the host auth system can apply it; this service only delivers mail.
    #[derive(Debug, Clone)]
    pub struct ResetPasswordResult {
        pub password: String,
        pub delivered: bool,
        pub recipients: Vec<String>,
    }
}
