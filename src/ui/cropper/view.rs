// SPDX-License-Identifier: MPL-2.0
//! Cropper dialog layout: preview with overlay, zoom slider, actions.

use super::overlay::CropOverlay;
use super::{Message, State};
use crate::avatar::crop::{MAX_ZOOM, MIN_ZOOM};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, slider, text, Canvas, Column, Row, Stack};
use iced::{Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let selection = state.selection();
    let rect = selection.pixel_rect();

    let preview = image(state.preview.clone())
        .width(Length::Fixed(sizing::CROP_CANVAS))
        .height(Length::Fixed(sizing::CROP_CANVAS))
        .content_fit(iced::ContentFit::Contain);

    let canvas_area = Stack::new()
        .push(preview)
        .push(
            Canvas::new(CropOverlay {
                rect,
                img_width: selection.source_width(),
                img_height: selection.source_height(),
            })
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .width(Length::Fixed(sizing::CROP_CANVAS))
        .height(Length::Fixed(sizing::CROP_CANVAS));

    let zoom_row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(text(i18n.tr("cropper-zoom")).size(typography::BODY))
        .push(
            slider(MIN_ZOOM..=MAX_ZOOM, selection.zoom(), Message::ZoomChanged)
                .step(0.1)
                .width(Length::Fill),
        );

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(i18n.tr("cropper-cancel")).size(typography::BODY))
                .style(styles::button::text_link)
                .on_press(Message::CancelPressed),
        )
        .push(
            button(text(i18n.tr("cropper-confirm")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ConfirmPressed),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center)
        .push(text(i18n.tr("cropper-title")).size(typography::TITLE_MD))
        .push(canvas_area)
        .push(zoom_row)
        .push(actions);

    container(content)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
