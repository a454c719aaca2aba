//! # REST API for Profile Management
//!
//! Endpoints for creating, retrieving, updating, and deleting user profiles,
//! plus the derived age and birthday queries.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::profiles::AgeQuery;
use crate::backend::io::rest::mappers::ProfileMapper;
use crate::backend::AppState;
use shared::{CreateProfileRequest, DeleteProfileResponse, UpdateProfileRequest};

/// Optional reference date for age and birthday queries; defaults to today.
#[derive(Debug, Deserialize)]
pub struct ReferenceDateParams {
    pub date: Option<NaiveDate>,
}

/// Create a new profile
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> impl IntoResponse {
    info!("POST /api/profiles - request: {:?}", request);

    let command = ProfileMapper::to_create_command(request);
    match state.profile_service.create_profile(command) {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ProfileMapper::to_profile_response_dto(
                result.profile,
                "Profile created successfully.",
            )),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create profile: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get a profile by username
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}", username);

    match state.profile_service.get_profile(&username) {
        Ok(result) => match result.profile {
            Some(profile) => (StatusCode::OK, Json(ProfileMapper::to_dto(profile))).into_response(),
            None => (StatusCode::NOT_FOUND, "Profile not found").into_response(),
        },
        Err(e) => {
            error!("Failed to get profile: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving profile").into_response()
        }
    }
}

/// List all profiles
pub async fn list_profiles(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profiles");

    match state.profile_service.list_profiles() {
        Ok(result) => (
            StatusCode::OK,
            Json(ProfileMapper::to_profile_list_dto(result.profiles)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list profiles: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing profiles").into_response()
        }
    }
}

/// Update a profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    info!("PUT /api/profiles/{} - request: {:?}", username, request);

    let command = ProfileMapper::to_update_command(&username, request);
    match state.profile_service.update_profile(command) {
        Ok(result) => (
            StatusCode::OK,
            Json(ProfileMapper::to_profile_response_dto(
                result.profile,
                "Profile updated successfully.",
            )),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update profile: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete a profile
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/profiles/{}", username);

    match state.profile_service.delete_profile(&username) {
        Ok(result) => (
            StatusCode::OK,
            Json(DeleteProfileResponse {
                success_message: result.success_message,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete profile: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a profile's age as a mixed calendar duration
pub async fn get_age(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<ReferenceDateParams>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}/age", username);

    let query = AgeQuery {
        username,
        reference_date: params.date,
    };
    match state.profile_service.get_age(query) {
        Ok(result) => (StatusCode::OK, Json(ProfileMapper::to_age_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to compute age: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get the birthday anniversary nearest to the reference date
pub async fn get_birthday(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<ReferenceDateParams>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}/birthday", username);

    let query = AgeQuery {
        username,
        reference_date: params.date,
    };
    match state.profile_service.get_birthday(query) {
        Ok(result) => (StatusCode::OK, Json(ProfileMapper::to_birthday_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to compute birthday: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}
