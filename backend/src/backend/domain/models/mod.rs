pub mod display_image;
pub mod profile;
