use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::backend::domain::models::display_image::DisplayImage;
use crate::backend::storage::traits::DisplayImageStorage;

/// CSV-based display-image record repository: one `images.csv` per profile
/// directory, rewritten atomically on every change.
#[derive(Clone)]
pub struct ImageRepository {
    connection: Arc<CsvConnection>,
}

impl ImageRepository {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    /// Read all image records for a user from their CSV file.
    fn read_images(&self, username: &str) -> Result<Vec<DisplayImage>> {
        let file_path = self.connection.images_csv_path(username);
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open image records {:?}", file_path))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut images = Vec::new();
        for result in csv_reader.records() {
            let record = result?;

            let created_at = DateTime::parse_from_rfc3339(record.get(3).unwrap_or(""))
                .context("Invalid created_at in image record")?
                .with_timezone(&Utc);

            images.push(DisplayImage {
                id: record.get(0).unwrap_or("").to_string(),
                username: record.get(1).unwrap_or("").to_string(),
                filename: record.get(2).unwrap_or("").to_string(),
                created_at,
            });
        }

        Ok(images)
    }

    /// Write all image records for a user to their CSV file.
    fn write_images(&self, username: &str, images: &[DisplayImage]) -> Result<()> {
        self.connection.ensure_profile_directory(username)?;
        let file_path = self.connection.images_csv_path(username);

        // Write to a temporary file first, then rename for an atomic swap
        let temp_path = file_path.with_extension("tmp");
        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));

            csv_writer.write_record(["id", "username", "filename", "created_at"])?;
            for image in images {
                csv_writer.write_record([
                    image.id.as_str(),
                    image.username.as_str(),
                    image.filename.as_str(),
                    &image.created_at.to_rfc3339(),
                ])?;
            }
            csv_writer.flush()?;
        }
        std::fs::rename(&temp_path, &file_path)?;

        Ok(())
    }
}

impl DisplayImageStorage for ImageRepository {
    fn store_image(&self, image: &DisplayImage) -> Result<()> {
        let mut images = self.read_images(&image.username)?;
        images.push(image.clone());
        self.write_images(&image.username, &images)
    }

    fn get_image(&self, username: &str, image_id: &str) -> Result<Option<DisplayImage>> {
        let images = self.read_images(username)?;
        Ok(images.into_iter().find(|image| image.id == image_id))
    }

    fn list_images(&self, username: &str) -> Result<Vec<DisplayImage>> {
        let mut images = self.read_images(username)?;
        images.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(images)
    }

    fn delete_image(&self, username: &str, image_id: &str) -> Result<bool> {
        let mut images = self.read_images(username)?;
        let before = images.len();
        images.retain(|image| image.id != image_id);

        if images.len() == before {
            return Ok(false);
        }
        self.write_images(username, &images)?;
        Ok(true)
    }
}
