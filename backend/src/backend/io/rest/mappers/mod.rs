//! Converters between the shared API DTOs and the domain models.

pub mod image_mapper;
pub mod profile_mapper;

pub use image_mapper::ImageMapper;
pub use profile_mapper::ProfileMapper;
