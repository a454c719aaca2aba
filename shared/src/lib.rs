use serde::{Deserialize, Serialize};

/// Profile ID in format: "profile::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Username of the owning auth user (unique)
    pub username: String,
    pub first_name: String,
    /// Middle names, space separated; empty when the user has none
    pub middle_names: String,
    pub last_name: String,
    /// Email address; empty when unknown
    pub email: String,
    /// National identity number in display form ("dddddd-dddd"); empty when unknown
    pub national_id: String,
    pub gender: Gender,
    pub address: String,
    pub postal_code: String,
    pub phone: String,
    pub mobile: String,
    pub homepages: Vec<Website>,
    /// Full name with middle names abbreviated to initials
    pub short_full_name: String,
    /// RFC 3339 timestamps
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

/// A homepage linked from a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub username: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_names: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Raw national identity number; hyphens allowed, empty means unknown
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub homepages: Vec<Website>,
}

/// All fields optional; only the provided ones are changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteProfileResponse {
    pub success_message: String,
}

/// Age broken down as a mixed calendar duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResponse {
    /// None when the profile has no national identity number on record
    pub age: Option<AgeBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    /// The birth date derived from the national identity number (YYYY-MM-DD)
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayResponse {
    /// None when the profile has no national identity number on record
    pub birthday: Option<BirthdayInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayInfo {
    /// The anniversary nearest to the reference date (YYYY-MM-DD)
    pub closest_birthday: String,
    /// "today" | "upcoming" | "past"
    pub proximity: String,
    pub months: u32,
    pub days: u32,
    /// Human-readable message, e.g. "has a birthday in 2 months and 5 days"
    pub label: String,
}

/// A stored profile photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayImage {
    pub id: String,
    pub username: String,
    pub filename: String,
    pub created_at: String,
}

/// A resolved, size-specific reference to an image variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLocation {
    pub size: String,
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddImageRequest {
    /// Stored filename of the original upload; variant files are derived from it
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: DisplayImage,
    pub locations: Vec<ImageLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageListResponse {
    pub images: Vec<DisplayImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayImageResponse {
    /// Filename the locations were resolved for (default image when the user has no photos)
    pub filename: String,
    /// True when the filename is the configured default rather than an uploaded photo
    pub is_default: bool,
    pub locations: Vec<ImageLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    /// The newly generated password, for the host auth system to apply
    pub password: String,
    /// Whether the notification email was handed to the SMTP transport
    pub delivered: bool,
    /// Addresses the email was sent to (user, or administrators as fallback)
    pub recipients: Vec<String>,
    pub success_message: String,
}
