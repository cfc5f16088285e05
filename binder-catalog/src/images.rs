//! Card image resolution.
//!
//! A card's `img` column points at a local file. Missing or undecodable
//! files resolve to a fixed placeholder so the rest of the card still renders.

use std::path::{Path, PathBuf};

/// 1x1 transparent PNG.
pub const PLACEHOLDER_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    File {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    Placeholder,
}

impl CardImage {
    /// Source string suitable for an `<img src>` or a terminal link.
    pub fn src(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Placeholder => PLACEHOLDER_DATA_URI.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Resolve an image reference, relative paths against `base_dir`.
pub fn resolve_image(base_dir: &Path, image_ref: &str) -> CardImage {
    if image_ref.trim().is_empty() {
        return CardImage::Placeholder;
    }

    let path = base_dir.join(image_ref);
    if !path.exists() {
        log::warn!("Image not found: {}. Using placeholder.", path.display());
        return CardImage::Placeholder;
    }

    match image::image_dimensions(&path) {
        Ok((width, height)) => CardImage::File {
            path,
            width,
            height,
        },
        Err(e) => {
            log::warn!("Failed to read image {}: {e}", path.display());
            CardImage::Placeholder
        }
    }
}
