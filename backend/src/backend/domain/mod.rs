//! # Domain Module
//!
//! Contains all business logic for the user profile service.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how profiles are modeled, derived values are computed, and
//! profile photos are resolved. It operates independently of any specific
//! transport or storage mechanism.
//!
//! ## Module Organization
//!
//! - **national_id**: National registry ID parsing and birth date extraction
//! - **age**: Calendar age arithmetic and birthday proximity
//! - **display_image**: Image size variants and location resolution
//! - **profile_service**: Profile CRUD plus age and birthday queries
//! - **image_service**: Photo records and size-variant locations
//! - **password_service**: Password reset generation and email delivery
//!
//! ## Core Concepts
//!
//! - **Profile**: One user's contact details and registry identity
//! - **National ID**: A ten-digit registry number encoding the birth date
//! - **Display Image**: A recorded photo filename with resolvable variants
//! - **Closest Birthday**: The anniversary of the birth date nearest to today

pub mod age;
pub mod commands;
pub mod display_image;
pub mod error;
pub mod image_service;
pub mod models;
pub mod national_id;
pub mod password_service;
pub mod postal_codes;
pub mod profile_service;

pub use error::ProfileError;
pub use image_service::DisplayImageService;
pub use national_id::NationalId;
pub use password_service::{EmailConfig, PasswordResetService};
pub use profile_service::ProfileService;
