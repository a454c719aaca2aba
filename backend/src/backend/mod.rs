//! # Backend Module
//!
//! Contains all non-UI logic for the user profile service.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for profiles, ages, birthdays, and photos
//! - **Storage**: Data persistence (per-profile YAML plus CSV image records)
//! - **IO**: Interface layer that exposes functionality over REST
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (File persistence)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::config::AppConfig;
use crate::backend::domain::display_image::ImageLocationResolver;
use crate::backend::domain::{DisplayImageService, PasswordResetService, ProfileService};
use crate::backend::storage::csv::CsvConnection;

pub use config::*;
pub use domain::*;
pub use storage::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub image_service: DisplayImageService,
    pub password_service: Arc<PasswordResetService>,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: AppConfig) -> Result<AppState> {
    info!("Setting up profile storage");
    let csv_conn = match &config.data_dir {
        Some(dir) => CsvConnection::new(dir)?,
        None => CsvConnection::new_default()?,
    };
    let csv_conn = Arc::new(csv_conn);

    info!("Setting up domain services");
    let profile_service = ProfileService::new(csv_conn.clone());
    let resolver = ImageLocationResolver::new(config.image.clone());
    let image_service = DisplayImageService::new(csv_conn.clone(), resolver);
    let password_service = Arc::new(PasswordResetService::new(csv_conn, config.email.clone())?);

    Ok(AppState {
        profile_service,
        image_service,
        password_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a web frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/profiles",
            get(io::rest::profile_apis::list_profiles).post(io::rest::profile_apis::create_profile),
        )
        .route(
            "/profiles/:username",
            get(io::rest::profile_apis::get_profile)
                .put(io::rest::profile_apis::update_profile)
                .delete(io::rest::profile_apis::delete_profile),
        )
        .route("/profiles/:username/age", get(io::rest::profile_apis::get_age))
        .route(
            "/profiles/:username/birthday",
            get(io::rest::profile_apis::get_birthday),
        )
        .route(
            "/profiles/:username/images",
            get(io::rest::image_apis::list_images).post(io::rest::image_apis::add_image),
        )
        .route(
            "/profiles/:username/images/:image_id",
            delete(io::rest::image_apis::delete_image),
        )
        .route(
            "/profiles/:username/display-image",
            get(io::rest::image_apis::get_display_image),
        )
        .route(
            "/profiles/:username/reset-password",
            post(io::rest::password_apis::reset_password),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
