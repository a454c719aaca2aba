//! # REST API for Display Images
//!
//! Endpoints for recording profile photos and resolving their size-variant
//! locations. The image files themselves are served statically; these
//! endpoints only deal in records and resolved references.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::images::AddImageCommand;
use crate::backend::domain::error::ProfileError;
use crate::backend::io::rest::mappers::ImageMapper;
use crate::backend::AppState;
use shared::{AddImageRequest, DisplayImageResponse};

#[derive(Debug, Deserialize)]
pub struct DisplayImageParams {
    /// Restrict the response to a single size tag
    pub size: Option<String>,
}

/// Record a newly uploaded photo for a user
pub async fn add_image(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<AddImageRequest>,
) -> impl IntoResponse {
    info!("POST /api/profiles/{}/images - request: {:?}", username, request);

    let command = AddImageCommand {
        username,
        filename: request.filename,
    };
    match state.image_service.add_image(command) {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ImageMapper::to_image_response_dto(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to add image: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// List a user's photo records
pub async fn list_images(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}/images", username);

    match state.image_service.list_images(&username) {
        Ok(result) => (StatusCode::OK, Json(ImageMapper::to_image_list_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to list images: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing images").into_response()
        }
    }
}

/// Delete a photo record
pub async fn delete_image(
    State(state): State<AppState>,
    Path((username, image_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/profiles/{}/images/{}", username, image_id);

    match state.image_service.delete_image(&username, &image_id) {
        Ok(_) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete image: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Resolve a display image for a user, picked at random from their photos,
/// or the configured default when they have none. With `?size=` the response
/// carries that single variant; otherwise all variants are included.
pub async fn get_display_image(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<DisplayImageParams>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}/display-image", username);

    if let Some(size_tag) = params.size {
        return match state.image_service.resolve_for_size(&username, &size_tag) {
            Ok((filename, location)) => {
                let is_default =
                    filename == state.image_service.resolver().config().default_image;
                (
                    StatusCode::OK,
                    Json(DisplayImageResponse {
                        filename,
                        is_default,
                        locations: vec![ImageMapper::to_location_dto(size_tag, location)],
                    }),
                )
                    .into_response()
            }
            Err(e) => {
                error!("Failed to resolve display image: {}", e);
                let status = if e.downcast_ref::<ProfileError>().is_some() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, e.to_string()).into_response()
            }
        };
    }

    match state.image_service.pick_display_image(&username) {
        Ok(result) => (
            StatusCode::OK,
            Json(ImageMapper::to_display_image_dto(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to pick display image: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error resolving display image").into_response()
        }
    }
}
