// SPDX-License-Identifier: MPL-2.0
//! Interactive avatar cropper.
//!
//! Hosts a square crop selection over the chosen source image. The user
//! pans by dragging inside the canvas and adjusts magnification with a
//! zoom slider. Confirming hands the selection back to the application,
//! which rasterizes it to JPEG for upload.

mod overlay;
mod view;

use crate::avatar::crop::CropSelection;
use iced::widget::image::Handle;

pub use view::view;

/// Messages emitted by the cropper UI.
#[derive(Debug, Clone)]
pub enum Message {
    ZoomChanged(f32),
    PointerPressed { x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    PointerReleased,
    CancelPressed,
    ConfirmPressed,
}

/// Events the cropper reports to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user confirmed the crop; the parent should rasterize and upload.
    Confirmed,
    /// The user dismissed the cropper without cropping.
    Cancelled,
}

/// Cropper state: the live selection plus a preview handle for display.
pub struct State {
    selection: CropSelection,
    preview: Handle,
    drag_anchor: Option<(f32, f32)>,
}

impl State {
    pub fn new(selection: CropSelection) -> Self {
        let rgba = selection.source().to_rgba8();
        let (width, height) = rgba.dimensions();
        let preview = Handle::from_rgba(width, height, rgba.into_raw());

        Self {
            selection,
            preview,
            drag_anchor: None,
        }
    }

    pub fn selection(&self) -> &CropSelection {
        &self.selection
    }

    /// Consumes the cropper and yields the final selection.
    pub fn into_selection(self) -> CropSelection {
        self.selection
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ZoomChanged(zoom) => {
                self.selection.set_zoom(zoom);
                Event::None
            }
            Message::PointerPressed { x, y } => {
                self.drag_anchor = Some((x, y));
                Event::None
            }
            Message::PointerMoved { x, y } => {
                if let Some((prev_x, prev_y)) = self.drag_anchor {
                    self.selection.pan_by(x - prev_x, y - prev_y);
                    self.drag_anchor = Some((x, y));
                }
                Event::None
            }
            Message::PointerReleased => {
                self.drag_anchor = None;
                Event::None
            }
            Message::CancelPressed => {
                self.drag_anchor = None;
                Event::Cancelled
            }
            Message::ConfirmPressed => Event::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::DynamicImage;

    fn square_state(side: u32) -> State {
        State::new(CropSelection::new(DynamicImage::new_rgb8(side, side)))
    }

    #[test]
    fn zoom_message_updates_selection() {
        let mut state = square_state(100);
        let event = state.update(Message::ZoomChanged(2.0));
        assert_eq!(event, Event::None);
        assert!((state.selection().zoom() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn drag_pans_the_selection() {
        let mut state = square_state(200);
        state.update(Message::ZoomChanged(2.0));
        let before = state.selection().pixel_rect();

        state.update(Message::PointerPressed { x: 100.0, y: 100.0 });
        state.update(Message::PointerMoved { x: 120.0, y: 100.0 });
        state.update(Message::PointerReleased);

        let after = state.selection().pixel_rect();
        assert!(after.x > before.x);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut state = square_state(200);
        state.update(Message::ZoomChanged(2.0));
        let before = state.selection().pixel_rect();

        state.update(Message::PointerMoved { x: 150.0, y: 150.0 });

        assert_eq!(state.selection().pixel_rect(), before);
    }

    #[test]
    fn confirm_and_cancel_surface_events() {
        let mut state = square_state(64);
        assert_eq!(state.update(Message::ConfirmPressed), Event::Confirmed);
        assert_eq!(state.update(Message::CancelPressed), Event::Cancelled);
    }
}
