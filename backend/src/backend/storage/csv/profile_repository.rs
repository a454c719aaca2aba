use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::backend::domain::models::profile::{Gender, UserProfile, Website};
use crate::backend::storage::traits::ProfileStorage;

/// Intermediate struct for YAML serialization with string date fields
#[derive(Debug, Clone, Serialize, Deserialize)]
struct YamlProfile {
    id: String,
    username: String,
    first_name: String,
    middle_names: String,
    last_name: String,
    email: String,
    national_id: String,
    gender: Gender,
    address: String,
    postal_code: String,
    phone: String,
    mobile: String,
    homepages: Vec<Website>,
    created_at: String,
    updated_at: String,
}

impl YamlProfile {
    fn from_domain(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            middle_names: profile.middle_names.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            national_id: profile.national_id.clone(),
            gender: profile.gender,
            address: profile.address.clone(),
            postal_code: profile.postal_code.clone(),
            phone: profile.phone.clone(),
            mobile: profile.mobile.clone(),
            homepages: profile.homepages.clone(),
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }

    fn into_domain(self) -> Result<UserProfile> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .context("Invalid created_at in profile document")?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .context("Invalid updated_at in profile document")?
            .with_timezone(&Utc);

        Ok(UserProfile {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            middle_names: self.middle_names,
            last_name: self.last_name,
            email: self.email,
            national_id: self.national_id,
            gender: self.gender,
            address: self.address,
            postal_code: self.postal_code,
            phone: self.phone,
            mobile: self.mobile,
            homepages: self.homepages,
            created_at,
            updated_at,
        })
    }
}

/// Profile repository backed by one YAML document per profile directory,
/// discovered by scanning the base directory.
#[derive(Clone)]
pub struct ProfileRepository {
    connection: Arc<CsvConnection>,
}

impl ProfileRepository {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    fn write_profile(&self, profile: &UserProfile) -> Result<()> {
        self.connection.ensure_profile_directory(&profile.username)?;
        let yaml_path = self.connection.profile_yaml_path(&profile.username);

        let document = serde_yaml::to_string(&YamlProfile::from_domain(profile))
            .context("Failed to serialize profile document")?;
        fs::write(&yaml_path, document)
            .with_context(|| format!("Failed to write profile document {:?}", yaml_path))?;

        Ok(())
    }

    fn read_profile(&self, username: &str) -> Result<Option<UserProfile>> {
        let yaml_path = self.connection.profile_yaml_path(username);
        if !yaml_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&yaml_path)
            .with_context(|| format!("Failed to read profile document {:?}", yaml_path))?;
        let yaml_profile: YamlProfile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse profile document {:?}", yaml_path))?;

        Ok(Some(yaml_profile.into_domain()?))
    }

    /// Discover all profiles by scanning profile directories.
    fn discover_profiles(&self) -> Result<Vec<UserProfile>> {
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            debug!("Base directory doesn't exist, returning empty profile list");
            return Ok(Vec::new());
        }

        let mut profiles = Vec::new();
        for entry in fs::read_dir(base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let yaml_path = path.join("profile.yaml");
            if !yaml_path.exists() {
                continue;
            }

            let content = fs::read_to_string(&yaml_path)
                .with_context(|| format!("Failed to read profile document {:?}", yaml_path))?;
            match serde_yaml::from_str::<YamlProfile>(&content) {
                Ok(yaml_profile) => profiles.push(yaml_profile.into_domain()?),
                Err(e) => {
                    warn!("Skipping unreadable profile document {:?}: {}", yaml_path, e);
                }
            }
        }

        Ok(profiles)
    }
}

impl ProfileStorage for ProfileRepository {
    fn store_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write_profile(profile)
    }

    fn get_profile(&self, username: &str) -> Result<Option<UserProfile>> {
        self.read_profile(username)
    }

    fn list_profiles(&self) -> Result<Vec<UserProfile>> {
        let mut profiles = self.discover_profiles()?;
        // Same ordering the original admin list used
        profiles.sort_by(|a, b| {
            (a.first_name.as_str(), a.middle_names.as_str(), a.last_name.as_str()).cmp(&(
                b.first_name.as_str(),
                b.middle_names.as_str(),
                b.last_name.as_str(),
            ))
        });
        Ok(profiles)
    }

    fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        let yaml_path = self.connection.profile_yaml_path(&profile.username);
        if !yaml_path.exists() {
            return Err(anyhow::anyhow!("Profile not found: {}", profile.username));
        }
        self.write_profile(profile)
    }

    fn delete_profile(&self, username: &str) -> Result<bool> {
        let dir = self.connection.profile_directory(username);
        if !dir.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&dir)
            .with_context(|| format!("Failed to remove profile directory {:?}", dir))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;

    fn sample_profile(username: &str, first_name: &str) -> UserProfile {
        UserProfile {
            id: UserProfile::generate_id(42),
            username: username.to_string(),
            first_name: first_name.to_string(),
            middle_names: String::new(),
            last_name: "Jonsson".to_string(),
            email: String::new(),
            national_id: "2210873319".to_string(),
            gender: Gender::Unspecified,
            address: String::new(),
            postal_code: String::new(),
            phone: String::new(),
            mobile: String::new(),
            homepages: vec![Website {
                url: "https://example.com".to_string(),
                name: "Example".to_string(),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_store_and_get_roundtrip() {
        let env = TestEnvironment::new().unwrap();
        let repo = ProfileRepository::new(Arc::new(env.connection.clone()));

        let profile = sample_profile("jonb", "Jon");
        repo.store_profile(&profile).unwrap();

        let loaded = repo.get_profile("jonb").unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_get_missing_profile() {
        let env = TestEnvironment::new().unwrap();
        let repo = ProfileRepository::new(Arc::new(env.connection.clone()));
        assert!(repo.get_profile("nobody").unwrap().is_none());
    }

    #[test]
    fn test_list_orders_by_name() {
        let env = TestEnvironment::new().unwrap();
        let repo = ProfileRepository::new(Arc::new(env.connection.clone()));

        repo.store_profile(&sample_profile("bgisla", "Birna")).unwrap();
        repo.store_profile(&sample_profile("arni", "Arni")).unwrap();

        let profiles = repo.list_profiles().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].first_name, "Arni");
        assert_eq!(profiles[1].first_name, "Birna");
    }

    #[test]
    fn test_update_requires_existing() {
        let env = TestEnvironment::new().unwrap();
        let repo = ProfileRepository::new(Arc::new(env.connection.clone()));

        let profile = sample_profile("jonb", "Jon");
        assert!(repo.update_profile(&profile).is_err());

        repo.store_profile(&profile).unwrap();
        let mut changed = profile.clone();
        changed.address = "Elsewhere 2".to_string();
        repo.update_profile(&changed).unwrap();

        let loaded = repo.get_profile("jonb").unwrap().unwrap();
        assert_eq!(loaded.address, "Elsewhere 2");
    }

    #[test]
    fn test_delete_profile() {
        let env = TestEnvironment::new().unwrap();
        let repo = ProfileRepository::new(Arc::new(env.connection.clone()));

        repo.store_profile(&sample_profile("jonb", "Jon")).unwrap();
        assert!(repo.delete_profile("jonb").unwrap());
        assert!(repo.get_profile("jonb").unwrap().is_none());
        assert!(!repo.delete_profile("jonb").unwrap());
    }
}
