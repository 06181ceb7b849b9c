// SPDX-License-Identifier: MPL-2.0
//! Change-password dialog.
//!
//! Collects the current and new passwords, validates locally, and hands
//! a ready [`PasswordChange`] payload to the application on submit.

use crate::api::types::PasswordChange;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone)]
pub enum Message {
    CurrentChanged(String),
    NewChanged(String),
    ConfirmChanged(String),
    SubmitPressed,
    CancelPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(PasswordChange),
    Cancelled,
}

#[derive(Debug, Default)]
pub struct State {
    current: String,
    new: String,
    confirm: String,
    error_key: Option<&'static str>,
    submitting: bool,
}

impl State {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clears the pending flag after the request settles. The parent
    /// closes the dialog on success and keeps it open on failure.
    pub fn submit_finished(&mut self) {
        self.submitting = false;
    }

    fn validate(&self) -> Option<&'static str> {
        if self.new.chars().count() < MIN_PASSWORD_CHARS {
            return Some("password-too-short");
        }
        if self.new != self.confirm {
            return Some("password-mismatch");
        }
        None
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CurrentChanged(value) => {
                self.current = value;
                Event::None
            }
            Message::NewChanged(value) => {
                self.new = value;
                Event::None
            }
            Message::ConfirmChanged(value) => {
                self.confirm = value;
                Event::None
            }
            Message::SubmitPressed => {
                if self.submitting {
                    return Event::None;
                }
                if let Some(key) = self.validate() {
                    self.error_key = Some(key);
                    return Event::None;
                }
                self.error_key = None;
                self.submitting = true;
                Event::Submitted(PasswordChange {
                    old_password: self.current.clone(),
                    new_password: self.new.clone(),
                })
            }
            Message::CancelPressed => Event::Cancelled,
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut fields = Column::new()
        .spacing(spacing::MD)
        .push(secure_input(
            i18n.tr("password-current"),
            &state.current,
            Message::CurrentChanged,
        ))
        .push(secure_input(
            i18n.tr("password-new"),
            &state.new,
            Message::NewChanged,
        ))
        .push(secure_input(
            i18n.tr("password-confirm"),
            &state.confirm,
            Message::ConfirmChanged,
        ));

    if let Some(key) = state.error_key {
        fields = fields.push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(i18n.tr("password-cancel")).size(typography::BODY))
                .style(styles::button::text_link)
                .on_press(Message::CancelPressed),
        )
        .push({
            let submit = button(text(i18n.tr("password-submit")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]);
            if state.submitting {
                submit
            } else {
                submit.on_press(Message::SubmitPressed)
            }
        });

    container(
        Column::new()
            .spacing(spacing::LG)
            .align_x(iced::Alignment::Center)
            .push(text(i18n.tr("password-title")).size(typography::TITLE_MD))
            .push(fields)
            .push(actions),
    )
    .width(Length::Fixed(sizing::FORM_FIELD_WIDTH + spacing::XL * 2.0))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn secure_input<'a>(
    placeholder: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(&placeholder, value)
        .secure(true)
        .on_input(on_input)
        .padding(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_new_password_is_rejected() {
        let mut state = State::default();
        state.update(Message::CurrentChanged("old-password".into()));
        state.update(Message::NewChanged("short".into()));
        state.update(Message::ConfirmChanged("short".into()));

        assert_eq!(state.update(Message::SubmitPressed), Event::None);
        assert_eq!(state.error_key, Some("password-too-short"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut state = State::default();
        state.update(Message::NewChanged("long-enough-1".into()));
        state.update(Message::ConfirmChanged("long-enough-2".into()));

        assert_eq!(state.update(Message::SubmitPressed), Event::None);
        assert_eq!(state.error_key, Some("password-mismatch"));
    }

    #[test]
    fn valid_input_submits_payload() {
        let mut state = State::default();
        state.update(Message::CurrentChanged("old-password".into()));
        state.update(Message::NewChanged("new-password".into()));
        state.update(Message::ConfirmChanged("new-password".into()));

        match state.update(Message::SubmitPressed) {
            Event::Submitted(change) => {
                assert_eq!(change.old_password, "old-password");
                assert_eq!(change.new_password, "new-password");
            }
            other => panic!("expected Submitted, got {other:?}"),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn submit_is_ignored_while_pending() {
        let mut state = State::default();
        state.update(Message::CurrentChanged("old-password".into()));
        state.update(Message::NewChanged("new-password".into()));
        state.update(Message::ConfirmChanged("new-password".into()));

        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Submitted(_)
        ));
        assert_eq!(state.update(Message::SubmitPressed), Event::None);
    }

    #[test]
    fn validation_error_clears_after_successful_submit() {
        let mut state = State::default();
        state.update(Message::NewChanged("short".into()));
        state.update(Message::ConfirmChanged("short".into()));
        state.update(Message::SubmitPressed);
        assert!(state.error_key.is_some());

        state.update(Message::NewChanged("new-password".into()));
        state.update(Message::ConfirmChanged("new-password".into()));
        state.update(Message::SubmitPressed);
        assert!(state.error_key.is_none());
    }
}
