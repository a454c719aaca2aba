use crate::backend::domain::commands::images::{
    AddImageResult, DisplayImageResult, ListImagesResult,
};
use crate::backend::domain::display_image::ImageLocation as DomainLocation;
use crate::backend::domain::models::display_image::DisplayImage as DomainImage;
use shared::{
    DisplayImage as SharedImage, DisplayImageResponse, ImageListResponse,
    ImageLocation as SharedLocation, ImageResponse,
};

/// Mapper to convert between shared image DTOs and domain models.
pub struct ImageMapper;

impl ImageMapper {
    pub fn to_dto(domain: DomainImage) -> SharedImage {
        SharedImage {
            id: domain.id,
            username: domain.username,
            filename: domain.filename,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_location_dto(size: String, location: DomainLocation) -> SharedLocation {
        SharedLocation {
            size,
            url: location.url,
            path: location.path.to_string_lossy().into_owned(),
        }
    }

    pub fn to_location_list_dto(locations: Vec<(String, DomainLocation)>) -> Vec<SharedLocation> {
        locations
            .into_iter()
            .map(|(size, location)| Self::to_location_dto(size, location))
            .collect()
    }

    pub fn to_image_response_dto(result: AddImageResult) -> ImageResponse {
        ImageResponse {
            image: Self::to_dto(result.image),
            locations: Self::to_location_list_dto(result.locations),
        }
    }

    pub fn to_image_list_dto(result: ListImagesResult) -> ImageListResponse {
        ImageListResponse {
            images: result.images.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_display_image_dto(result: DisplayImageResult) -> DisplayImageResponse {
        DisplayImageResponse {
            filename: result.filename,
            is_default: result.is_default,
            locations: Self::to_location_list_dto(result.locations),
        }
    }
}
