// SPDX-License-Identifier: MPL-2.0
//! Profile screen layout.

use super::{Message, State};
use crate::api::types::User;
use crate::greeting::Greeting;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, container, image, mouse_area, text, text_input, Column, Row, Space, Stack,
};
use iced::{Element, Length};

/// Read-only data the profile view needs beyond its own state.
pub struct ViewContext<'a> {
    pub user: &'a User,
    pub i18n: &'a I18n,
    pub clock: chrono::DateTime<chrono::Local>,
    pub avatar: Option<&'a image::Handle>,
    pub avatar_uploading: bool,
    pub spinner_rotation: f32,
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(iced::Alignment::Center)
        .push(header(ctx))
        .push(avatar(ctx))
        .push(form_card(state, ctx))
        .push(account_actions(state, ctx))
        .max_width(640);

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Greeting line and the minute clock.
fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let greeting = Greeting::from_time(&ctx.clock);
    let salutation = format!(
        "{}, {}",
        ctx.i18n.tr(greeting.i18n_key()),
        ctx.user.display_name()
    );

    Column::new()
        .spacing(spacing::XXS)
        .align_x(iced::Alignment::Center)
        .push(text(salutation).size(typography::TITLE_LG))
        .push(
            text(crate::greeting::clock_label(&ctx.clock))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .into()
}

/// The avatar disc. Clicking it opens the enlarged view; a spinner is
/// stacked on top while an upload is in flight.
fn avatar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let side = sizing::AVATAR_SM;

    let picture: Element<'a, Message> = match ctx.avatar {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(
            text(ctx.i18n.tr("avatar-placeholder"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(styles::container::field)
        .into(),
    };

    let disc = container(picture)
        .clip(true)
        .style(|_theme| iced::widget::container::Style {
            border: iced::Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        });

    let surface: Element<'a, Message> = if ctx.avatar_uploading {
        Stack::new()
            .push(disc)
            .push(
                container(
                    AnimatedSpinner::new(
                        palette::WHITE,
                        ctx.spinner_rotation,
                        sizing::ICON_XL,
                    )
                    .into_element(),
                )
                .width(Length::Fixed(side))
                .height(Length::Fixed(side))
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .style(styles::container::modal_backdrop),
            )
            .into()
    } else {
        disc.into()
    };

    mouse_area(surface).on_press(Message::AvatarPressed).into()
}

/// The editable details card: header with mode controls, then the fields.
fn form_card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let controls: Element<'a, Message> = if state.is_editing() {
        Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("profile-cancel")).size(typography::BODY))
                    .style(styles::button::text_link)
                    .on_press(Message::CancelPressed),
            )
            .push({
                let save = button(text(i18n.tr("profile-save")).size(typography::BODY))
                    .style(styles::button::primary)
                    .padding([spacing::XS, spacing::MD]);
                if state.is_saving() {
                    save
                } else {
                    save.on_press(Message::SavePressed)
                }
            })
            .into()
    } else {
        button(text(i18n.tr("profile-edit")).size(typography::BODY))
            .style(styles::button::primary)
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::EditPressed)
            .into()
    };

    let heading = Row::new()
        .align_y(iced::Alignment::Center)
        .push(text(i18n.tr("profile-edit-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(controls);

    let fields: Element<'a, Message> = if state.is_editing() {
        editable_fields(state, ctx)
    } else {
        readonly_fields(ctx)
    };

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(fields),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn editable_fields<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let draft = state.draft();

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            i18n.tr("profile-first-name"),
            i18n.tr("profile-first-name-placeholder"),
            &draft.firstname,
            Message::FirstnameChanged,
        ))
        .push(labeled_input(
            i18n.tr("profile-last-name"),
            i18n.tr("profile-last-name-placeholder"),
            &draft.lastname,
            Message::LastnameChanged,
        ));

    let remaining = draft.bio_remaining().to_string();
    let bio = Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("profile-bio")))
        .push(
            text_input(&i18n.tr("profile-bio-placeholder"), &draft.bio)
                .on_input(Message::BioChanged)
                .padding(spacing::XS),
        )
        .push(
            text(i18n.tr_with_args("profile-bio-remaining", &[("count", remaining.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(name_row)
        .push(labeled_input(
            i18n.tr("profile-dob"),
            i18n.tr("profile-dob-placeholder"),
            &draft.dob,
            Message::DobChanged,
        ))
        .push(bio)
        .into()
}

fn readonly_fields<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let user = ctx.user;

    let dob = user
        .dob_date()
        .map(|date| date.format("%Y-%m-%d").to_string());

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_value(
            i18n,
            i18n.tr("profile-first-name"),
            user.firstname.as_deref(),
        ))
        .push(labeled_value(
            i18n,
            i18n.tr("profile-last-name"),
            user.lastname.as_deref(),
        ));

    Column::new()
        .spacing(spacing::MD)
        .push(name_row)
        .push(labeled_value(i18n, i18n.tr("profile-dob"), dob.as_deref()))
        .push(labeled_value(i18n, i18n.tr("profile-bio"), user.bio.as_deref()))
        .into()
}

fn labeled_input<'a>(
    label: String,
    placeholder: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(field_label(label))
        .push(
            text_input(&placeholder, value)
                .on_input(on_input)
                .padding(spacing::XS),
        )
        .into()
}

/// A read-only field box. Empty or missing values display as "Not set".
fn labeled_value<'a>(i18n: &I18n, label: String, value: Option<&str>) -> Element<'a, Message> {
    let shown = match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => i18n.tr("profile-not-set"),
    };

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(field_label(label))
        .push(
            container(text(shown).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::field),
        )
        .into()
}

fn field_label<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into()
}

/// Email line, verification status, password and logout controls.
fn account_actions<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let user = ctx.user;

    let email_row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(field_label(i18n.tr("profile-email-label")))
        .push(text(user.email.clone()).size(typography::BODY));

    let verification: Element<'a, Message> = if user.is_email_verified {
        text(format!("{} ✓", i18n.tr("profile-email-verified")))
            .size(typography::BODY)
            .color(palette::SUCCESS_500)
            .into()
    } else {
        let (label, enabled) = if state.is_verifying() {
            (i18n.tr("profile-email-sending"), false)
        } else {
            (i18n.tr("profile-email-send-verification"), true)
        };
        let link = button(text(label).size(typography::BODY)).style(styles::button::text_link);
        if enabled {
            link.on_press(Message::SendVerificationPressed).into()
        } else {
            link.into()
        }
    };

    let verification_row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(field_label(i18n.tr("profile-email-verification-label")))
        .push(verification);

    let mut buttons = Row::new().spacing(spacing::MD);
    if !user.uses_third_party_login() {
        buttons = buttons.push(
            button(text(i18n.tr("profile-change-password")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ChangePasswordPressed),
        );
    }
    buttons = buttons.push(
        button(text(i18n.tr("profile-logout")).size(typography::BODY))
            .style(styles::button::danger)
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::LogoutPressed),
    );

    Column::new()
        .spacing(spacing::SM)
        .align_x(iced::Alignment::Center)
        .push(email_row)
        .push(verification_row)
        .push(buttons)
        .into()
}
