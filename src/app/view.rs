// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::components::modal;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{cropper, password_modal, profile};
use iced::widget::{button, container, image, text, Column, Row, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Profile => view_profile_screen(app),
        Screen::Landing => view_landing(app),
    };

    let screen = apply_dialogs(app, screen);

    // Toasts render above everything, including open dialogs
    Stack::new()
        .push(screen)
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_profile_screen(app: &App) -> Element<'_, Message> {
    let Some(user) = app.session.user() else {
        return if app.loading {
            view_loading(app)
        } else {
            centered_note(app.i18n.tr("profile-load-failed"))
        };
    };

    let ctx = profile::ViewContext {
        user,
        i18n: &app.i18n,
        clock: app.clock,
        avatar: app.avatar_handle.as_ref(),
        avatar_uploading: app.avatar_flow.is_uploading(),
        spinner_rotation: app.spinner_rotation,
    };

    profile::view(&app.profile, &ctx).map(Message::Profile)
}

/// Stacks whichever dialog is open over the base screen. The cropper and
/// the password dialog take priority over the simple avatar view.
fn apply_dialogs<'a>(app: &'a App, base: Element<'a, Message>) -> Element<'a, Message> {
    if let Some(state) = &app.cropper {
        return modal(
            base,
            cropper::view(state, &app.i18n).map(Message::Cropper),
            Message::Cropper(cropper::Message::CancelPressed),
        );
    }

    if let Some(state) = &app.password_modal {
        return modal(
            base,
            password_modal::view(state, &app.i18n).map(Message::PasswordModal),
            Message::PasswordModal(password_modal::Message::CancelPressed),
        );
    }

    if app.avatar_view_open {
        return modal(base, avatar_dialog(app), Message::AvatarViewDismissed);
    }

    base
}

/// Enlarged avatar with the controls to change or close.
fn avatar_dialog(app: &App) -> Element<'_, Message> {
    let side = sizing::AVATAR_LG;

    let picture: Element<'_, Message> = match &app.avatar_handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(
            text(app.i18n.tr("avatar-placeholder"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(styles::container::field)
        .into(),
    };

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(app.i18n.tr("avatar-view-close")).size(typography::BODY))
                .style(styles::button::text_link)
                .on_press(Message::AvatarViewDismissed),
        )
        .push(
            button(text(app.i18n.tr("avatar-view-change")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ChangeAvatarPressed),
        );

    container(
        Column::new()
            .spacing(spacing::LG)
            .align_x(iced::Alignment::Center)
            .push(picture)
            .push(actions),
    )
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn view_loading(app: &App) -> Element<'_, Message> {
    container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(iced::Alignment::Center)
            .push(
                AnimatedSpinner::new(
                    palette::PRIMARY_500,
                    app.spinner_rotation,
                    sizing::ICON_XL,
                )
                .into_element(),
            )
            .push(
                text(app.i18n.tr("profile-loading"))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_400),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}

fn view_landing(app: &App) -> Element<'_, Message> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(iced::Alignment::Center)
            .push(text(app.i18n.tr("landing-signed-out")).size(typography::TITLE_MD))
            .push(
                text(app.i18n.tr("landing-hint"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}

fn centered_note<'a>(message: String) -> Element<'a, Message> {
    container(text(message).size(typography::BODY_LG).color(palette::GRAY_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
