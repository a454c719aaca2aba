//! File-backed storage: one directory per profile containing a YAML profile
//! document and a CSV file of display-image records.

pub mod connection;
pub mod image_repository;
pub mod profile_repository;
pub mod test_utils;

pub use connection::CsvConnection;
pub use image_repository::ImageRepository;
pub use profile_repository::ProfileRepository;
