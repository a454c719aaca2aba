use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::age::{birthday_offset, calculate_age, closest_birthday};
use crate::backend::domain::commands::profiles::{
    AgeQuery, AgeResult, BirthdayResult, ComputedAge, ComputedBirthday, CreateProfileCommand,
    CreateProfileResult, DeleteProfileResult, GetProfileResult, ListProfilesResult,
    UpdateProfileCommand, UpdateProfileResult,
};
use crate::backend::domain::error::ProfileError;
use crate::backend::domain::models::profile::UserProfile;
use crate::backend::domain::national_id::NationalId;
use crate::backend::storage::csv::{CsvConnection, ProfileRepository};
use crate::backend::storage::traits::ProfileStorage;

/// Service for managing user profiles and the age/birthday queries derived
/// from their national identity numbers.
#[derive(Clone)]
pub struct ProfileService {
    profile_repository: ProfileRepository,
}

impl ProfileService {
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let profile_repository = ProfileRepository::new(csv_conn);
        Self { profile_repository }
    }

    /// Create a new profile
    pub fn create_profile(&self, command: CreateProfileCommand) -> Result<CreateProfileResult> {
        info!("Creating profile for username={}", command.username);

        self.validate_username(&command.username)?;
        let national_id = Self::normalize_national_id(&command.national_id)?;

        if self
            .profile_repository
            .get_profile(&command.username)?
            .is_some()
        {
            return Err(anyhow::anyhow!(
                "Profile already exists: {}",
                command.username
            ));
        }

        let now = Utc::now();
        let profile = UserProfile {
            id: UserProfile::generate_id(now.timestamp_millis() as u64),
            username: command.username.trim().to_string(),
            first_name: command.first_name.trim().to_string(),
            middle_names: command.middle_names.trim().to_string(),
            last_name: command.last_name.trim().to_string(),
            email: command.email.trim().to_string(),
            national_id,
            gender: command.gender,
            address: command.address,
            postal_code: command.postal_code,
            phone: command.phone,
            mobile: command.mobile,
            homepages: command.homepages,
            created_at: now,
            updated_at: now,
        };

        self.profile_repository.store_profile(&profile)?;
        info!("Created profile {} for {}", profile.id, profile.username);

        Ok(CreateProfileResult { profile })
    }

    /// Get a profile by username
    pub fn get_profile(&self, username: &str) -> Result<GetProfileResult> {
        let profile = self.profile_repository.get_profile(username)?;
        if profile.is_none() {
            warn!("Profile not found: {}", username);
        }
        Ok(GetProfileResult { profile })
    }

    /// List all profiles ordered by name
    pub fn list_profiles(&self) -> Result<ListProfilesResult> {
        let profiles = self.profile_repository.list_profiles()?;
        info!("Found {} profiles", profiles.len());
        Ok(ListProfilesResult { profiles })
    }

    /// Update an existing profile
    pub fn update_profile(&self, command: UpdateProfileCommand) -> Result<UpdateProfileResult> {
        info!("Updating profile: {}", command.username);

        let mut profile = self
            .profile_repository
            .get_profile(&command.username)?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", command.username))?;

        if let Some(first_name) = command.first_name {
            profile.first_name = first_name.trim().to_string();
        }
        if let Some(middle_names) = command.middle_names {
            profile.middle_names = middle_names.trim().to_string();
        }
        if let Some(last_name) = command.last_name {
            profile.last_name = last_name.trim().to_string();
        }
        if let Some(email) = command.email {
            profile.email = email.trim().to_string();
        }
        if let Some(national_id) = command.national_id {
            profile.national_id = Self::normalize_national_id(&national_id)?;
        }
        if let Some(gender) = command.gender {
            profile.gender = gender;
        }
        if let Some(address) = command.address {
            profile.address = address;
        }
        if let Some(postal_code) = command.postal_code {
            profile.postal_code = postal_code;
        }
        if let Some(phone) = command.phone {
            profile.phone = phone;
        }
        if let Some(mobile) = command.mobile {
            profile.mobile = mobile;
        }
        if let Some(homepages) = command.homepages {
            profile.homepages = homepages;
        }

        profile.updated_at = Utc::now();
        self.profile_repository.update_profile(&profile)?;

        info!("Updated profile: {}", profile.username);
        Ok(UpdateProfileResult { profile })
    }

    /// Delete a profile
    pub fn delete_profile(&self, username: &str) -> Result<DeleteProfileResult> {
        info!("Deleting profile: {}", username);

        let deleted = self.profile_repository.delete_profile(username)?;
        if !deleted {
            return Err(anyhow::anyhow!("Profile not found: {}", username));
        }

        Ok(DeleteProfileResult {
            success_message: format!("Profile '{}' deleted successfully", username),
        })
    }

    /// Compute the profile holder's age as of the query's reference date.
    /// Returns `age: None` when no national identity number is on record:
    /// an unknown birth date is an expected state, not a fault.
    pub fn get_age(&self, query: AgeQuery) -> Result<AgeResult> {
        let profile = self.require_profile(&query.username)?;
        let reference = query
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());

        let birth_date = match profile.birth_date() {
            Ok(date) => date,
            Err(ProfileError::MissingNationalId) => return Ok(AgeResult { age: None }),
            Err(e) => return Err(e).context("Stored national identity number is unusable"),
        };

        if birth_date > reference {
            return Err(anyhow::anyhow!(
                "Reference date {} precedes birth date {}",
                reference,
                birth_date
            ));
        }

        Ok(AgeResult {
            age: Some(ComputedAge {
                birth_date,
                delta: calculate_age(birth_date, reference),
            }),
        })
    }

    /// Age in whole years, the most common display form.
    pub fn get_age_in_years(&self, query: AgeQuery) -> Result<Option<u32>> {
        Ok(self.get_age(query)?.age.map(|age| age.delta.years))
    }

    /// Birth date derived from the stored identity number, `None` when no
    /// number is on record.
    pub fn get_birth_date(&self, username: &str) -> Result<Option<NaiveDate>> {
        let profile = self.require_profile(username)?;
        match profile.birth_date() {
            Ok(date) => Ok(Some(date)),
            Err(ProfileError::MissingNationalId) => Ok(None),
            Err(e) => Err(e).context("Stored national identity number is unusable"),
        }
    }

    /// Locate the anniversary nearest the reference date, with its calendar
    /// offset. Returns `birthday: None` when the birth date is unknown.
    pub fn get_birthday(&self, query: AgeQuery) -> Result<BirthdayResult> {
        let profile = self.require_profile(&query.username)?;
        let reference = query
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());

        let birth_date = match profile.birth_date() {
            Ok(date) => date,
            Err(ProfileError::MissingNationalId) => return Ok(BirthdayResult { birthday: None }),
            Err(e) => return Err(e).context("Stored national identity number is unusable"),
        };

        Ok(BirthdayResult {
            birthday: Some(ComputedBirthday {
                closest_birthday: closest_birthday(birth_date, reference),
                proximity: birthday_offset(birth_date, reference),
            }),
        })
    }

    fn require_profile(&self, username: &str) -> Result<UserProfile> {
        self.profile_repository
            .get_profile(username)?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", username))
    }

    fn validate_username(&self, username: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(anyhow::anyhow!("Username cannot be empty"));
        }
        if username.len() > 100 {
            return Err(anyhow::anyhow!("Username cannot exceed 100 characters"));
        }
        Ok(())
    }

    /// Clean and validate an identity number for storage. Empty stays empty
    /// ("unknown"); anything present must be a valid 10-digit value.
    fn normalize_national_id(raw: &str) -> Result<String> {
        match NationalId::parse(raw) {
            Ok(id) => Ok(id.digits().to_string()),
            Err(ProfileError::MissingNationalId) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::age::BirthdayProximity;
    use crate::backend::domain::models::profile::Gender;
    use tempfile::tempdir;

    fn setup_test() -> (ProfileService, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let conn = CsvConnection::new(temp_dir.path()).unwrap();
        (ProfileService::new(Arc::new(conn)), temp_dir)
    }

    fn create_command(username: &str, national_id: &str) -> CreateProfileCommand {
        CreateProfileCommand {
            username: username.to_string(),
            first_name: "Jon".to_string(),
            middle_names: String::new(),
            last_name: "Jonsson".to_string(),
            email: "jon@example.com".to_string(),
            national_id: national_id.to_string(),
            gender: Gender::Male,
            address: String::new(),
            postal_code: String::new(),
            phone: String::new(),
            mobile: String::new(),
            homepages: Vec::new(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_create_profile() {
        let (service, _guard) = setup_test();
        let result = service
            .create_profile(create_command("jonb", "221087-3319"))
            .unwrap();
        assert_eq!(result.profile.username, "jonb");
        // Identity number is stored in its clean form
        assert_eq!(result.profile.national_id, "2210873319");
    }

    #[test]
    fn test_create_profile_rejects_duplicates() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", ""))
            .unwrap();
        assert!(service
            .create_profile(create_command("jonb", ""))
            .is_err());
    }

    #[test]
    fn test_create_profile_rejects_malformed_national_id() {
        let (service, _guard) = setup_test();
        assert!(service
            .create_profile(create_command("jonb", "12345"))
            .is_err());
        assert!(service
            .create_profile(create_command("jonb", "221087331x"))
            .is_err());
    }

    #[test]
    fn test_update_profile_fields() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", "2210873319"))
            .unwrap();

        let result = service
            .update_profile(UpdateProfileCommand {
                username: "jonb".to_string(),
                address: Some("Elsewhere 2".to_string()),
                national_id: Some("150305-3150".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(result.profile.address, "Elsewhere 2");
        assert_eq!(result.profile.national_id, "1503053150");
        assert_eq!(result.profile.first_name, "Jon");
    }

    #[test]
    fn test_delete_profile() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", ""))
            .unwrap();
        service.delete_profile("jonb").unwrap();
        assert!(service.get_profile("jonb").unwrap().profile.is_none());
        assert!(service.delete_profile("jonb").is_err());
    }

    #[test]
    fn test_get_age() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", "2210873319"))
            .unwrap();

        let result = service
            .get_age(AgeQuery {
                username: "jonb".to_string(),
                reference_date: Some(date(2008, 10, 3)),
            })
            .unwrap();

        let age = result.age.unwrap();
        assert_eq!(age.birth_date, date(1987, 10, 22));
        assert_eq!(age.delta.years, 20);
        assert_eq!(age.delta.months, 11);
        assert_eq!(age.delta.days, 11);
    }

    #[test]
    fn test_get_age_without_national_id() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", ""))
            .unwrap();

        let result = service
            .get_age(AgeQuery {
                username: "jonb".to_string(),
                reference_date: Some(date(2008, 10, 3)),
            })
            .unwrap();
        assert!(result.age.is_none());

        let years = service
            .get_age_in_years(AgeQuery {
                username: "jonb".to_string(),
                reference_date: Some(date(2008, 10, 3)),
            })
            .unwrap();
        assert!(years.is_none());
    }

    #[test]
    fn test_get_birth_date() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", "2210873319"))
            .unwrap();
        service.create_profile(create_command("anna", "")).unwrap();

        assert_eq!(
            service.get_birth_date("jonb").unwrap(),
            Some(date(1987, 10, 22))
        );
        assert_eq!(service.get_birth_date("anna").unwrap(), None);
    }

    #[test]
    fn test_get_age_unknown_profile() {
        let (service, _guard) = setup_test();
        assert!(service
            .get_age(AgeQuery {
                username: "nobody".to_string(),
                reference_date: None,
            })
            .is_err());
    }

    #[test]
    fn test_get_birthday_on_the_day() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", "2210873319"))
            .unwrap();

        let result = service
            .get_birthday(AgeQuery {
                username: "jonb".to_string(),
                reference_date: Some(date(2008, 10, 22)),
            })
            .unwrap();

        let birthday = result.birthday.unwrap();
        assert_eq!(birthday.closest_birthday, date(2008, 10, 22));
        assert_eq!(birthday.proximity, BirthdayProximity::Today);
    }

    #[test]
    fn test_get_birthday_upcoming() {
        let (service, _guard) = setup_test();
        service
            .create_profile(create_command("jonb", "2210873319"))
            .unwrap();

        let result = service
            .get_birthday(AgeQuery {
                username: "jonb".to_string(),
                reference_date: Some(date(2008, 10, 3)),
            })
            .unwrap();

        let birthday = result.birthday.unwrap();
        assert_eq!(birthday.closest_birthday, date(2008, 10, 22));
        assert_eq!(
            birthday.proximity,
            BirthdayProximity::Upcoming {
                months: 0,
                days: 19
            }
        );
    }
}
