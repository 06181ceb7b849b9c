// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay drawn on top of the cropper preview.
//!
//! Dims everything outside the current crop square, strokes its border,
//! and translates pointer input into image-space coordinates for panning.

use crate::avatar::crop::CropRect;
use crate::ui::design_tokens::{border, opacity, palette};
use super::Message;

/// Canvas program rendering the crop square over the preview image.
pub struct CropOverlay {
    pub rect: CropRect,
    pub img_width: u32,
    pub img_height: u32,
}

impl CropOverlay {
    /// Geometry of the preview image inside the canvas (ContentFit::Contain).
    fn display_frame(&self, bounds: iced::Rectangle) -> (f32, f32, f32, f32) {
        let img_aspect = self.img_width as f32 / self.img_height as f32;
        let bounds_aspect = bounds.width / bounds.height;

        if img_aspect > bounds_aspect {
            let display_width = bounds.width;
            let display_height = bounds.width / img_aspect;
            let offset_y = (bounds.height - display_height) / 2.0;
            (display_width, display_height, 0.0, offset_y)
        } else {
            let display_height = bounds.height;
            let display_width = bounds.height * img_aspect;
            let offset_x = (bounds.width - display_width) / 2.0;
            (display_width, display_height, offset_x, 0.0)
        }
    }

    /// Converts canvas coordinates to image coordinates, clamped to bounds.
    fn screen_to_image(&self, position: iced::Point, bounds: iced::Rectangle) -> (f32, f32) {
        let (display_width, display_height, offset_x, offset_y) = self.display_frame(bounds);

        let clamped_x = position.x.max(offset_x).min(offset_x + display_width);
        let clamped_y = position.y.max(offset_y).min(offset_y + display_height);

        let img_x = ((clamped_x - offset_x) * (self.img_width as f32 / display_width))
            .clamp(0.0, self.img_width as f32);
        let img_y = ((clamped_y - offset_y) * (self.img_height as f32 / display_height))
            .clamp(0.0, self.img_height as f32);

        (img_x, img_y)
    }
}

impl iced::widget::canvas::Program<Message> for CropOverlay {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    let (x, y) = self.screen_to_image(position, bounds);
                    return Some(Action::publish(Message::PointerPressed { x, y }).and_capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // Leaving the canvas mid-drag ends the pan
                let Some(position) = cursor.position_in(bounds) else {
                    return Some(Action::publish(Message::PointerReleased).and_capture());
                };
                let (x, y) = self.screen_to_image(position, bounds);
                return Some(Action::publish(Message::PointerMoved { x, y }).and_capture());
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left))
            | iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::PointerReleased).and_capture());
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());

        let (display_width, display_height, offset_x, offset_y) = self.display_frame(bounds);
        let scale_x = display_width / self.img_width as f32;
        let scale_y = display_height / self.img_height as f32;

        let crop_x = offset_x + self.rect.x as f32 * scale_x;
        let crop_y = offset_y + self.rect.y as f32 * scale_y;
        let crop_w = self.rect.size as f32 * scale_x;
        let crop_h = self.rect.size as f32 * scale_y;

        let dim = iced::Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        };

        // Top band
        if crop_y > offset_y {
            frame.fill_rectangle(
                iced::Point::new(offset_x, offset_y),
                iced::Size::new(display_width, crop_y - offset_y),
                dim,
            );
        }

        // Bottom band
        let bottom = crop_y + crop_h;
        if bottom < offset_y + display_height {
            frame.fill_rectangle(
                iced::Point::new(offset_x, bottom),
                iced::Size::new(display_width, offset_y + display_height - bottom),
                dim,
            );
        }

        // Left band
        if crop_x > offset_x {
            frame.fill_rectangle(
                iced::Point::new(offset_x, crop_y),
                iced::Size::new(crop_x - offset_x, crop_h),
                dim,
            );
        }

        // Right band
        let right = crop_x + crop_w;
        if right < offset_x + display_width {
            frame.fill_rectangle(
                iced::Point::new(right, crop_y),
                iced::Size::new(offset_x + display_width - right, crop_h),
                dim,
            );
        }

        let outline = Path::rectangle(
            iced::Point::new(crop_x, crop_y),
            iced::Size::new(crop_w, crop_h),
        );
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(palette::WHITE),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> iced::mouse::Interaction {
        if cursor.is_over(bounds) {
            iced::mouse::Interaction::Grab
        } else {
            iced::mouse::Interaction::default()
        }
    }
}
