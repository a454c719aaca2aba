use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::backend::domain::commands::images::{
    AddImageCommand, AddImageResult, DeleteImageResult, DisplayImageResult, ListImagesResult,
};
use crate::backend::domain::display_image::{ImageLocation, ImageLocationResolver};
use crate::backend::domain::models::display_image::DisplayImage;
use crate::backend::storage::csv::{CsvConnection, ImageRepository};
use crate::backend::storage::traits::DisplayImageStorage;

/// Service for profile photo records and their size-variant locations.
///
/// Variant files themselves are produced by an external resizer that shares
/// the resolver's directory convention; this service never touches the
/// filesystem under the media root.
#[derive(Clone)]
pub struct DisplayImageService {
    image_repository: ImageRepository,
    resolver: ImageLocationResolver,
}

impl DisplayImageService {
    pub fn new(csv_conn: Arc<CsvConnection>, resolver: ImageLocationResolver) -> Self {
        let image_repository = ImageRepository::new(csv_conn);
        Self {
            image_repository,
            resolver,
        }
    }

    pub fn resolver(&self) -> &ImageLocationResolver {
        &self.resolver
    }

    /// Record a newly uploaded photo and resolve its variant locations.
    pub fn add_image(&self, command: AddImageCommand) -> Result<AddImageResult> {
        info!(
            "Adding image for username={}, filename={}",
            command.username, command.filename
        );

        let filename = command.filename.trim().to_string();
        if filename.is_empty() {
            return Err(anyhow::anyhow!("Image filename cannot be empty"));
        }

        let now = Utc::now();
        let image = DisplayImage {
            id: DisplayImage::generate_id(now.timestamp_micros() as u64),
            username: command.username,
            filename,
            created_at: now,
        };

        self.image_repository.store_image(&image)?;
        info!("Recorded image {} for {}", image.id, image.username);

        let locations = self.resolver.resolve_all(&image.filename);
        Ok(AddImageResult { image, locations })
    }

    /// List a user's photo records, oldest first.
    pub fn list_images(&self, username: &str) -> Result<ListImagesResult> {
        let images = self.image_repository.list_images(username)?;
        debug!("Found {} images for {}", images.len(), username);
        Ok(ListImagesResult { images })
    }

    /// Delete a photo record.
    pub fn delete_image(&self, username: &str, image_id: &str) -> Result<DeleteImageResult> {
        info!("Deleting image {} for {}", image_id, username);

        let deleted = self.image_repository.delete_image(username, image_id)?;
        if !deleted {
            return Err(anyhow::anyhow!("Image not found: {}", image_id));
        }

        Ok(DeleteImageResult {
            success_message: format!("Image '{}' deleted successfully", image_id),
        })
    }

    /// Pick one of the user's photos at random, falling back to the
    /// configured default image when none are recorded.
    pub fn pick_display_image(&self, username: &str) -> Result<DisplayImageResult> {
        let images = self.image_repository.list_images(username)?;

        let picked = {
            let mut rng = rand::thread_rng();
            images.choose(&mut rng).cloned()
        };

        match picked {
            Some(image) => {
                let locations = self.resolver.resolve_all(&image.filename);
                Ok(DisplayImageResult {
                    filename: image.filename,
                    is_default: false,
                    locations,
                })
            }
            None => {
                let default_image = self.resolver.config().default_image.clone();
                debug!(
                    "No images recorded for {}, using default {}",
                    username, default_image
                );
                let locations = self.resolver.resolve_all(&default_image);
                Ok(DisplayImageResult {
                    filename: default_image,
                    is_default: true,
                    locations,
                })
            }
        }
    }

    /// Resolve one size variant of a user's display image. The default image
    /// stands in only when the user genuinely has no photos; a storage
    /// failure is surfaced, not masked.
    pub fn resolve_for_size(&self, username: &str, size_tag: &str) -> Result<(String, ImageLocation)> {
        let images = self.image_repository.list_images(username)?;

        let picked = {
            let mut rng = rand::thread_rng();
            images.choose(&mut rng).cloned()
        };

        let filename = picked
            .map(|image| image.filename)
            .unwrap_or_else(|| self.resolver.config().default_image.clone());

        let location = self.resolver.resolve(size_tag, &filename)?;
        Ok((filename, location))
    }
}
