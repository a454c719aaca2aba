use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored profile photo. Only the original filename is recorded; size
/// variants are resolved on demand and produced by an external resizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayImage {
    pub id: String,
    pub username: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

impl DisplayImage {
    /// Generate a unique ID for an image record. Microsecond resolution so
    /// that a burst of uploads cannot collide.
    pub fn generate_id(timestamp_micros: u64) -> String {
        format!("image::{}", timestamp_micros)
    }
}
