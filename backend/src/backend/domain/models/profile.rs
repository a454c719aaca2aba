use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::domain::error::ProfileError;
use crate::backend::domain::national_id::NationalId;
use crate::backend::domain::postal_codes;

/// Gender as recorded on the profile; `Unspecified` when the user left it blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unspecified
    }
}

/// A homepage linked from a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub url: String,
    pub name: String,
}

/// Domain model for the demographic profile attached to an auth user.
///
/// The national identity number is stored in its clean 10-digit form, or as
/// an empty string when unknown. Everything date-of-birth related is derived
/// from it on demand; nothing here is persisted beyond the plain fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Generate a unique ID for a profile
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("profile::{}", timestamp_millis)
    }

    pub fn has_national_id(&self) -> bool {
        !self.national_id.is_empty()
    }

    /// The identity number in display form ("dddddd-dddd"), or the raw value
    /// when it is not a clean 10-digit string.
    pub fn formatted_national_id(&self) -> String {
        match NationalId::parse(&self.national_id) {
            Ok(id) => id.formatted(),
            Err(_) => self.national_id.clone(),
        }
    }

    /// Birth date derived from the national identity number.
    /// `MissingNationalId` when the profile has none on record.
    pub fn birth_date(&self) -> Result<NaiveDate, ProfileError> {
        NationalId::parse(&self.national_id)?.birth_date()
    }

    /// Full name; falls back to the username when first or last name is blank.
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return self.username.clone();
        }
        if self.middle_names.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            format!("{} {} {}", self.first_name, self.middle_names, self.last_name)
        }
    }

    /// Full name with middle names abbreviated to initials ("Jon B. Jonsson").
    pub fn short_full_name(&self) -> String {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return self.username.clone();
        }
        if self.middle_names.is_empty() {
            return format!("{} {}", self.first_name, self.last_name);
        }
        let initials: Vec<String> = self
            .middle_names
            .split_whitespace()
            .filter_map(|name| name.chars().next())
            .map(|initial| format!("{}.", initial))
            .collect();
        format!(
            "{} {} {}",
            self.first_name,
            initials.join(" "),
            self.last_name
        )
    }

    pub fn has_homepages(&self) -> bool {
        !self.homepages.is_empty()
    }

    /// Postal code with its locality ("101 Reykjavík"), empty when the code
    /// is unknown or not set.
    pub fn postal_code_and_city(&self) -> String {
        match postal_codes::locality_for(&self.postal_code) {
            Some(city) => format!("{} {}", self.postal_code, city),
            None => String::new(),
        }
    }

    /// Home locality derived from the postal code, empty when unknown.
    pub fn city(&self) -> String {
        postal_codes::locality_for(&self.postal_code)
            .unwrap_or_default()
            .to_string()
    }

    /// Friendly greeting for the display layer.
    pub fn welcome_note(&self) -> String {
        let name = if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        };
        format!("Welcome, {}", name)
    }

    /// Status line naming the signed-in user.
    pub fn logged_in_note(&self) -> String {
        format!(
            "You are logged in as {} ({})",
            self.short_full_name(),
            self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserProfile::generate_id(1),
            username: "jonb".to_string(),
            first_name: "Jon".to_string(),
            middle_names: "Bjarni Thor".to_string(),
            last_name: "Jonsson".to_string(),
            email: "jon@example.com".to_string(),
            national_id: "2210873319".to_string(),
            gender: Gender::Male,
            address: "Somewhere 1".to_string(),
            postal_code: "101".to_string(),
            phone: "5551234".to_string(),
            mobile: "6915555".to_string(),
            homepages: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_with_middle_names() {
        assert_eq!(profile().full_name(), "Jon Bjarni Thor Jonsson");
    }

    #[test]
    fn test_short_full_name_abbreviates_middle_names() {
        assert_eq!(profile().short_full_name(), "Jon B. T. Jonsson");
    }

    #[test]
    fn test_names_fall_back_to_username() {
        let mut p = profile();
        p.last_name = String::new();
        assert_eq!(p.full_name(), "jonb");
        assert_eq!(p.short_full_name(), "jonb");
    }

    #[test]
    fn test_formatted_national_id() {
        assert_eq!(profile().formatted_national_id(), "221087-3319");
    }

    #[test]
    fn test_birth_date_from_national_id() {
        assert_eq!(
            profile().birth_date().unwrap(),
            NaiveDate::from_ymd_opt(1987, 10, 22).unwrap()
        );
    }

    #[test]
    fn test_birth_date_missing_id() {
        let mut p = profile();
        p.national_id = String::new();
        assert!(!p.has_national_id());
        assert_eq!(p.birth_date(), Err(ProfileError::MissingNationalId));
    }

    #[test]
    fn test_postal_code_and_city() {
        let p = profile();
        assert_eq!(p.postal_code_and_city(), "101 Reykjavík");
        assert_eq!(p.city(), "Reykjavík");

        let mut unknown = profile();
        unknown.postal_code = "999".to_string();
        assert_eq!(unknown.postal_code_and_city(), "");
        assert_eq!(unknown.city(), "");
    }

    #[test]
    fn test_logged_in_note() {
        assert_eq!(
            profile().logged_in_note(),
            "You are logged in as Jon B. T. Jonsson (jonb)"
        );
    }

    #[test]
    fn test_welcome_note_prefers_first_name() {
        assert_eq!(profile().welcome_note(), "Welcome, Jon");
        let mut p = profile();
        p.first_name = String::new();
        assert_eq!(p.welcome_note(), "Welcome, jonb");
    }
}
