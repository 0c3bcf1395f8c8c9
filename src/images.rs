//! Closet image staging
//!
//! Loads candidate closet photos from disk into in-memory upload files.
//! Media types come from the file extension; judging whether a staged
//! file is acceptable is the validator's job, not this module's.

use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

use crate::error::{PlannerError, Result};
use crate::validation::UploadFile;

/// Load a single image file for upload
pub async fn load_upload_file(path: &Path) -> Result<UploadFile> {
    if !path.exists() || !path.is_file() {
        return Err(PlannerError::file_not_found(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| PlannerError::io_from_error("Reading image", e))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let mime_type = mime_guess::from_path(path).first_or_octet_stream().to_string();

    Ok(UploadFile { file_name, mime_type, bytes })
}

/// A directory of staged closet photos
#[derive(Debug)]
pub struct ImageDirectory {
    pub path: PathBuf,
    pub files: Vec<UploadFile>,
}

impl ImageDirectory {
    /// Scan a directory (top level only) and stage every image-typed file
    ///
    /// Files keep directory iteration order; non-image files are skipped
    /// silently so a mixed folder still works.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlannerError::file_not_found(path.display().to_string()));
        }
        if !path.is_dir() {
            return Err(PlannerError::invalid_input(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(path)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok());

        for entry in walker {
            if !entry.file_type().is_file() {
                continue;
            }
            let guess = mime_guess::from_path(entry.path()).first_or_octet_stream();
            if guess.type_() != mime_guess::mime::IMAGE {
                continue;
            }
            files.push(load_upload_file(entry.path()).await?);
        }

        if files.is_empty() {
            return Err(PlannerError::invalid_input(format!(
                "No image files found in {}",
                path.display()
            )));
        }

        Ok(Self { path: path.to_path_buf(), files })
    }
}
