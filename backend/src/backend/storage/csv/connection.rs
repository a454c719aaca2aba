use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection manages the data directory layout: one subdirectory per
/// profile holding a `profile.yaml` document and an `images.csv` record file.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection rooted at the given base directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory under the user's
    /// Documents folder.
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = documents_dir.join("User Profiles");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Generate a safe filesystem identifier from a username.
    /// Folds common accented characters, lowercases, and squeezes every other
    /// character run into a single underscore.
    pub fn safe_directory_name(username: &str) -> String {
        let folded = username.chars().map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'ý' | 'Ý' => 'y',
            'þ' | 'Þ' => 't',
            'ð' | 'Ð' => 'd',
            'æ' | 'Æ' => 'e',
            'ñ' | 'Ñ' => 'n',
            'ç' | 'Ç' => 'c',
            other => other,
        });

        let mut name = String::with_capacity(username.len());
        for c in folded {
            if c.is_ascii_alphanumeric() {
                name.push(c.to_ascii_lowercase());
            } else if !name.ends_with('_') {
                name.push('_');
            }
        }
        name.trim_matches('_').to_string()
    }

    /// Directory holding one profile's files.
    pub fn profile_directory(&self, username: &str) -> PathBuf {
        self.base_directory
            .join(Self::safe_directory_name(username))
    }

    /// Ensure a profile's directory exists.
    pub fn ensure_profile_directory(&self, username: &str) -> Result<PathBuf> {
        let dir = self.profile_directory(username);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Path of a profile's YAML document.
    pub fn profile_yaml_path(&self, username: &str) -> PathBuf {
        self.profile_directory(username).join("profile.yaml")
    }

    /// Path of a profile's image record file.
    pub fn images_csv_path(&self, username: &str) -> PathBuf {
        self.profile_directory(username).join("images.csv")
    }
}
