//! # Storage Module
//!
//! Data persistence for the profile service. The domain layer talks to the
//! traits in [`traits`]; the only implementation today is the per-directory
//! YAML/CSV backend in [`csv`].

pub mod csv;
pub mod traits;

pub use csv::*;
pub use traits::*;
