//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the profile service. This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Input validation before domain layer processing
//! - Error translation from domain to HTTP status codes
//! - CORS configuration for frontend integration
//! - Request logging

pub mod image_apis;
pub mod mappers;
pub mod password_apis;
pub mod profile_apis;
