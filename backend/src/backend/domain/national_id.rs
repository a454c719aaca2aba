//! National identity number handling.
//!
//! The identifier is a 10-digit personal number that encodes the holder's
//! birth date: digits 0-1 are the day, 2-3 the month, 4-5 a two-digit year,
//! and the final digit marks the century (9 selects the 1900s, anything else
//! the 2000s). The checksum embedded in the number is never verified here;
//! form-level validation is the host application's job.

use chrono::NaiveDate;

use crate::backend::domain::error::ProfileError;

/// A cleaned (hyphen-free) 10-digit national identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalId {
    digits: String,
}

impl NationalId {
    /// Parse a raw identity string. Hyphens are stripped before validation.
    ///
    /// An empty value is `MissingNationalId` (expected "unknown" state);
    /// anything else that is not exactly 10 digits is `InvalidNationalId`.
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let cleaned: String = raw.chars().filter(|c| *c != '-').collect();

        if cleaned.trim().is_empty() {
            return Err(ProfileError::MissingNationalId);
        }
        if cleaned.len() != 10 || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ProfileError::InvalidNationalId(raw.to_string()));
        }

        Ok(Self { digits: cleaned })
    }

    /// The clean 10-digit form.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Display form with the conventional hyphen: "dddddd-dddd".
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.digits[..6], &self.digits[6..])
    }

    /// Derive the holder's birth date from the encoded day, month, two-digit
    /// year and century digit.
    pub fn birth_date(&self) -> Result<NaiveDate, ProfileError> {
        let day: u32 = self.digits[0..2]
            .parse()
            .map_err(|_| ProfileError::InvalidNationalId(self.digits.clone()))?;
        let month: u32 = self.digits[2..4]
            .parse()
            .map_err(|_| ProfileError::InvalidNationalId(self.digits.clone()))?;
        let year_in_century: i32 = self.digits[4..6]
            .parse()
            .map_err(|_| ProfileError::InvalidNationalId(self.digits.clone()))?;

        // Century digit: 9 means born in the 1900s, otherwise the 2000s.
        let century = if self.digits.ends_with('9') { 1900 } else { 2000 };

        NaiveDate::from_ymd_opt(century + year_in_century, month, day)
            .ok_or_else(|| ProfileError::InvalidNationalId(self.digits.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_digits() {
        let id = NationalId::parse("2210873319").unwrap();
        assert_eq!(id.digits(), "2210873319");
    }

    #[test]
    fn test_parse_strips_hyphen() {
        let id = NationalId::parse("221087-3319").unwrap();
        assert_eq!(id.digits(), "2210873319");
        assert_eq!(id.formatted(), "221087-3319");
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert_eq!(NationalId::parse(""), Err(ProfileError::MissingNationalId));
        assert_eq!(NationalId::parse("-"), Err(ProfileError::MissingNationalId));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            NationalId::parse("12345"),
            Err(ProfileError::InvalidNationalId(_))
        ));
        assert!(matches!(
            NationalId::parse("22108733191"),
            Err(ProfileError::InvalidNationalId(_))
        ));
        assert!(matches!(
            NationalId::parse("221087abcd"),
            Err(ProfileError::InvalidNationalId(_))
        ));
    }

    #[test]
    fn test_birth_date_nineteen_hundreds() {
        // Century digit 9 -> 1987
        let id = NationalId::parse("2210873319").unwrap();
        assert_eq!(
            id.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(1987, 10, 22).unwrap()
        );
    }

    #[test]
    fn test_birth_date_two_thousands() {
        // Century digit 0 -> 2005
        let id = NationalId::parse("1503053150").unwrap();
        assert_eq!(
            id.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(2005, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_birth_date_leap_day() {
        let id = NationalId::parse("2902883759").unwrap();
        assert_eq!(
            id.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(1988, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birth_date_impossible_date() {
        // Day 32 cannot exist in any month
        let id = NationalId::parse("3213903319").unwrap();
        assert!(matches!(
            id.birth_date(),
            Err(ProfileError::InvalidNationalId(_))
        ));
    }
}
