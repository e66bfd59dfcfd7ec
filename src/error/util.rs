//! Utility functions for error handling
//!
//! File checks used by the loader and the exporters, with rich error
//! information attached.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::error::{Error, Result};

/// Safely open a source file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(Error::SourceRead {
            path: path.to_path_buf(),
            message: "Path is not a file".to_string(),
        })
        .with_context(|| format!("Expected a file for: {purpose}"));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let message = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "File not found - it may have been deleted during operation".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };

            Err(anyhow::Error::new(e).context(Error::SourceRead {
                path: path.to_path_buf(),
                message,
            }))
        }
    }
}

/// Create a destination file, creating missing parent directories
pub fn safe_create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::Export {
            path: path.to_path_buf(),
            message: format!("Cannot create directory {}: {e}", parent.display()),
        })?;
    }

    fs::File::create(path).map_err(|e| {
        anyhow::Error::from(Error::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}
