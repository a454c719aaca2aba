//! # IO Module
//!
//! The interface layer between callers and the domain logic. Translates
//! HTTP requests into domain commands and formats domain results as JSON
//! responses, keeping the boundary between transport and business logic.

pub mod rest;
