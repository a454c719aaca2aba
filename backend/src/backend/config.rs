//! Application configuration, loaded from a YAML file.
//!
//! Every field has a default, so the server also runs with no config file
//! at all (profiles under the documents directory, emails disabled).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::display_image::ImageConfig;
use crate::backend::domain::password_service::EmailConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where profile directories are kept. Defaults to the platform
    /// documents directory when absent.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: AppConfig =
            serde_yaml::from_str(&content).context("Failed to parse config YAML")?;

        Ok(config)
    }

    pub fn load_or_default(config_path: &Path) -> Self {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}", config_path, e);
                log::info!("Using default config (password emails disabled)");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
data_dir: /srv/profiles
image:
  media_root: /var/www/stigull/skrar/
  media_url: /skrar
  images_folder: myndir/simaskra/
  default_image: enginn.jpg
  sizes:
    small: { width: 50, height: 56 }
email:
  smtp_server: smtp.example.com
  smtp_port: 465
  username: mailer
  password: hunter2
  from_email: noreply@example.com
  admin_emails: [admin@example.com]
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", yaml).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/profiles")));
        assert_eq!(config.image.media_url, "/skrar");
        assert_eq!(config.image.default_image, "enginn.jpg");
        assert_eq!(config.image.sizes.len(), 1);
        assert_eq!(config.email.smtp_port, 465);
        assert_eq!(config.email.admin_emails, vec!["admin@example.com"]);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "data_dir: /srv/profiles\n").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.image.media_root, PathBuf::from("media"));
        assert!(config.email.username.is_empty());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/config.yaml"));
        assert!(config.data_dir.is_none());
        assert_eq!(config.image.default_image, "placeholder.jpg");
    }
}
