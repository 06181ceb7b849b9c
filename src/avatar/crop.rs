// SPDX-License-Identifier: MPL-2.0
//! Square crop selection over a decoded source image.
//!
//! The selection is a 1:1 pixel region driven by a zoom factor and a pan
//! offset. Zoom 1.0 selects the largest centered square that fits the
//! source; zoom 3.0 selects a third of that side. The derived rectangle is
//! always clamped inside the source bounds, so rasterizing can never read
//! out of range.

use crate::error::{Error, Result};
use image_rs::DynamicImage;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 3.0;

/// JPEG quality used for the uploaded avatar.
const JPEG_QUALITY: u8 = 90;

/// Pixel rectangle selected for cropping (always square).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Transient crop state. Exists only while the crop dialog is open.
#[derive(Debug, Clone)]
pub struct CropSelection {
    source: DynamicImage,
    zoom: f32,
    /// Crop center in source pixel coordinates.
    center_x: f32,
    center_y: f32,
}

impl CropSelection {
    /// Creates a centered selection at zoom 1.0.
    pub fn new(source: DynamicImage) -> Self {
        let center_x = source.width() as f32 / 2.0;
        let center_y = source.height() as f32 / 2.0;
        Self {
            source,
            zoom: MIN_ZOOM,
            center_x,
            center_y,
        }
    }

    pub fn source(&self) -> &DynamicImage {
        &self.source
    }

    pub fn source_width(&self) -> u32 {
        self.source.width()
    }

    pub fn source_height(&self) -> u32 {
        self.source.height()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Sets the zoom factor, clamped to `MIN_ZOOM..=MAX_ZOOM`, and re-clamps
    /// the pan so the selection stays inside the source.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_center();
    }

    /// Pans the selection center by the given source-pixel delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.center_x += dx;
        self.center_y += dy;
        self.clamp_center();
    }

    /// Side length of the selected square at the current zoom.
    fn side(&self) -> f32 {
        let max_side = self.source.width().min(self.source.height()) as f32;
        (max_side / self.zoom).max(1.0)
    }

    fn clamp_center(&mut self) {
        let half = self.side() / 2.0;
        let max_x = (self.source.width() as f32 - half).max(half);
        let max_y = (self.source.height() as f32 - half).max(half);
        self.center_x = self.center_x.clamp(half, max_x);
        self.center_y = self.center_y.clamp(half, max_y);
    }

    /// The selected pixel region, guaranteed inside the source bounds.
    pub fn pixel_rect(&self) -> CropRect {
        let side = self.side();
        let half = side / 2.0;
        let x = (self.center_x - half).round().max(0.0) as u32;
        let y = (self.center_y - half).round().max(0.0) as u32;
        let size = (side.round() as u32).max(1);

        // Rounding can push the edge one pixel past the border.
        let size = size
            .min(self.source.width().saturating_sub(x))
            .min(self.source.height().saturating_sub(y))
            .max(1);

        CropRect { x, y, size }
    }

    /// Rasterizes the selected region into a JPEG buffer for upload.
    pub fn rasterize_jpeg(&self) -> Result<Vec<u8>> {
        let rect = self.pixel_rect();
        let cropped = self
            .source
            .crop_imm(rect.x, rect.y, rect.size, rect.size)
            .to_rgb8();

        let mut buffer = Vec::new();
        let encoder = image_rs::codecs::jpeg::JpegEncoder::new_with_quality(
            std::io::Cursor::new(&mut buffer),
            JPEG_QUALITY,
        );
        cropped
            .write_with_encoder(encoder)
            .map_err(|e| Error::Image(e.to_string()))?;
        Ok(buffer)
    }
}
