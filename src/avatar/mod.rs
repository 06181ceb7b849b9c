// SPDX-License-Identifier: MPL-2.0
//! Avatar update pipeline.
//!
//! The pipeline is an explicit finite-state sequence instead of a set of
//! loose flags:
//!
//! ```text
//! Idle -> Selecting -> Cropping -> Uploading -> Idle
//! ```
//!
//! `Selecting` covers the async file dialog and the read/decode step,
//! `Cropping` the open crop dialog, `Uploading` the in-flight multipart
//! request (spinner overlay). Every step can cancel back to `Idle` without
//! touching the cached user record.

pub mod crop;

pub use crop::{CropSelection, MAX_ZOOM, MIN_ZOOM};

use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat};
use std::path::Path;

/// Extensions offered in the file dialog filter.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Content formats accepted for avatar sources. Anything else is rejected
/// before a crop dialog ever opens.
const ALLOWED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// Phase of the avatar update pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Idle,
    /// File dialog open or selected file being read and decoded.
    Selecting,
    /// Crop dialog open over a decoded source image.
    Cropping,
    /// Cropped JPEG in flight to the server.
    Uploading,
}

impl Flow {
    /// `Idle -> Selecting`. Returns false when a pipeline run is already
    /// active so a second dialog can't be stacked on the first.
    pub fn begin_selection(&mut self) -> bool {
        if *self == Flow::Idle {
            *self = Flow::Selecting;
            true
        } else {
            false
        }
    }

    /// `Selecting -> Cropping`, once a source image was decoded.
    pub fn begin_cropping(&mut self) -> bool {
        if *self == Flow::Selecting {
            *self = Flow::Cropping;
            true
        } else {
            false
        }
    }

    /// `Cropping -> Uploading`, after the user confirmed the crop.
    pub fn begin_upload(&mut self) -> bool {
        if *self == Flow::Cropping {
            *self = Flow::Uploading;
            true
        } else {
            false
        }
    }

    /// Returns to `Idle` from any phase. Used for cancellation and for the
    /// guaranteed final step after an upload settles.
    pub fn reset(&mut self) {
        *self = Flow::Idle;
    }

    pub fn is_uploading(self) -> bool {
        self == Flow::Uploading
    }
}

/// Reads and decodes a selected avatar source file, rejecting content that
/// is not JPEG, PNG, or WebP regardless of its extension.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path)?;

    let format = image_rs::guess_format(&bytes).map_err(|_| Error::UnsupportedImageFormat)?;
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(Error::UnsupportedImageFormat);
    }

    let image = image_rs::load_from_memory_with_format(&bytes, format)?;
    Ok(image)
}
