#![cfg(test)]

//! Test utilities providing RAII-based cleanup so test data is removed even
//! if tests panic or fail.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::image_repository::ImageRepository;
use super::profile_repository::ProfileRepository;
use crate::backend::domain::models::profile::{Gender, UserProfile};
use crate::backend::storage::traits::ProfileStorage;

/// Test environment with a temporary data directory that is removed when the
/// environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper bundling repository instances over one environment.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub profile_repo: ProfileRepository,
    pub image_repo: ImageRepository,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let connection = Arc::new(env.connection.clone());
        let profile_repo = ProfileRepository::new(connection.clone());
        let image_repo = ImageRepository::new(connection);
        Ok(Self {
            env,
            profile_repo,
            image_repo,
        })
    }

    /// Create a stored test profile with default values.
    pub fn create_test_profile(&self, username: &str) -> Result<UserProfile> {
        let now = Utc::now();
        let profile = UserProfile {
            id: UserProfile::generate_id(now.timestamp_millis() as u64),
            username: username.to_string(),
            first_name: "Test".to_string(),
            middle_names: String::new(),
            last_name: "User".to_string(),
            email: String::new(),
            national_id: "2210873319".to_string(),
            gender: Gender::Unspecified,
            address: String::new(),
            postal_code: String::new(),
            phone: String::new(),
            mobile: String::new(),
            homepages: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.profile_repo.store_profile(&profile)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_helper_creates_profiles() -> Result<()> {
        let helper = TestHelper::new()?;
        let profile = helper.create_test_profile("testuser")?;
        let stored = helper.profile_repo.get_profile("testuser")?;
        assert_eq!(stored, Some(profile));
        Ok(())
    }
}
