// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The avatar change flow is driven as an explicit sequence
//! (idle, selecting, cropping, uploading) so every cancellation point is
//! a checked transition rather than a loose flag.

use super::{App, Message, Screen, SPINNER_STEP};
use crate::api::types::{PasswordChange, ProfileUpdate, User};
use crate::avatar;
use crate::error::ApiError;
use crate::ui::notifications::Notification;
use crate::ui::{cropper, password_modal, profile};
use chrono::Local;
use iced::Task;
use std::f32::consts::TAU;
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Profile(message) => handle_profile(app, message),
        Message::Cropper(message) => handle_cropper(app, message),
        Message::PasswordModal(message) => handle_password_modal(app, message),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }

        Message::AvatarViewDismissed => {
            app.avatar_view_open = false;
            Task::none()
        }
        Message::ChangeAvatarPressed => handle_change_avatar(app),

        Message::ProfileFetched(result) => handle_profile_fetched(app, result),
        Message::ProfileSaved(result) => handle_profile_saved(app, result),
        Message::AvatarFileSelected(path) => handle_avatar_file_selected(app, path),
        Message::AvatarSourceLoaded(result) => handle_avatar_source_loaded(app, result),
        Message::AvatarUploaded(result) => handle_avatar_uploaded(app, result),
        Message::AvatarBytesFetched(result) => handle_avatar_bytes_fetched(app, result),
        Message::VerificationSent(result) => handle_verification_sent(app, result),
        Message::PasswordChanged(result) => handle_password_changed(app, result),
        Message::LoggedOut(result) => handle_logged_out(app, result),

        Message::Tick(_) => {
            app.notifications.tick();
            app.spinner_rotation = (app.spinner_rotation + SPINNER_STEP) % TAU;
            Task::none()
        }
        Message::ClockTick(_) => {
            app.clock = Local::now();
            Task::none()
        }
    }
}

fn handle_profile(app: &mut App, message: profile::Message) -> Task<Message> {
    let Some(user) = app.session.user() else {
        return Task::none();
    };
    let user = user.clone();

    match app.profile.update(message, &user) {
        profile::Event::None => Task::none(),
        profile::Event::SaveRequested(update) => save_profile(app, update),
        profile::Event::DobRejected => {
            app.notifications
                .push(Notification::warning("notification-dob-invalid"));
            Task::none()
        }
        profile::Event::AvatarViewRequested => {
            app.avatar_view_open = true;
            Task::none()
        }
        profile::Event::PasswordModalRequested => {
            app.password_modal = Some(password_modal::State::default());
            Task::none()
        }
        profile::Event::VerificationRequested => send_verification(app),
        profile::Event::LogoutRequested => logout(app),
    }
}

fn save_profile(app: &mut App, update: ProfileUpdate) -> Task<Message> {
    let Some(client) = app.api.clone() else {
        app.profile.save_finished(false);
        return Task::none();
    };
    Task::perform(
        async move { client.edit_profile(&update).await },
        Message::ProfileSaved,
    )
}

fn handle_profile_saved(app: &mut App, result: Result<User, ApiError>) -> Task<Message> {
    match result {
        Ok(user) => {
            app.profile.save_finished(true);
            app.session.commit(user);
            app.notifications
                .push(Notification::success("notification-profile-saved"));
        }
        Err(err) => {
            app.profile.save_finished(false);
            app.notifications.push(
                Notification::error("notification-profile-save-failed")
                    .with_arg("reason", err.reason()),
            );
        }
    }
    Task::none()
}

fn handle_profile_fetched(app: &mut App, result: Result<User, ApiError>) -> Task<Message> {
    app.loading = false;
    match result {
        Ok(user) => {
            let fetch = fetch_avatar_task(app, &user);
            app.session.commit(user);
            fetch
        }
        Err(err) => {
            app.notifications.push(
                Notification::error("notification-profile-load-failed")
                    .with_arg("reason", err.reason()),
            );
            Task::none()
        }
    }
}

/// Starts the avatar download for display, if the user has one.
fn fetch_avatar_task(app: &App, user: &User) -> Task<Message> {
    let (Some(client), true) = (app.api.clone(), user.has_avatar()) else {
        return Task::none();
    };
    let Some(url) = user.avatar.clone() else {
        return Task::none();
    };
    Task::perform(
        async move { client.fetch_avatar(&url).await },
        Message::AvatarBytesFetched,
    )
}

fn handle_avatar_bytes_fetched(app: &mut App, result: Result<Vec<u8>, ApiError>) -> Task<Message> {
    match result {
        Ok(bytes) => {
            app.avatar_handle = Some(iced::widget::image::Handle::from_bytes(bytes));
        }
        Err(err) => {
            app.notifications.push(
                Notification::error("notification-avatar-display-failed")
                    .with_arg("reason", err.reason()),
            );
        }
    }
    Task::none()
}

/// Opens the native file picker. Only one selection may be in flight.
fn handle_change_avatar(app: &mut App) -> Task<Message> {
    if !app.avatar_flow.begin_selection() {
        return Task::none();
    }
    app.avatar_view_open = false;

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", avatar::ALLOWED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::AvatarFileSelected,
    )
}

fn handle_avatar_file_selected(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // Picker dismissed
        app.avatar_flow.reset();
        return Task::none();
    };

    Task::perform(
        async move { avatar::load_source(&path).map(Box::new) },
        Message::AvatarSourceLoaded,
    )
}

fn handle_avatar_source_loaded(
    app: &mut App,
    result: Result<Box<image_rs::DynamicImage>, crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(source) => {
            if app.avatar_flow.begin_cropping() {
                let selection = avatar::crop::CropSelection::new(*source);
                app.cropper = Some(cropper::State::new(selection));
            }
        }
        Err(crate::error::Error::UnsupportedImageFormat) => {
            app.avatar_flow.reset();
            app.notifications
                .push(Notification::error("notification-avatar-invalid-type"));
        }
        Err(err) => {
            app.avatar_flow.reset();
            app.notifications.push(
                Notification::error("notification-avatar-load-failed")
                    .with_arg("reason", err.to_string()),
            );
        }
    }
    Task::none()
}

fn handle_cropper(app: &mut App, message: cropper::Message) -> Task<Message> {
    let Some(state) = app.cropper.as_mut() else {
        return Task::none();
    };

    match state.update(message) {
        cropper::Event::None => Task::none(),
        cropper::Event::Cancelled => {
            app.cropper = None;
            app.avatar_flow.reset();
            Task::none()
        }
        cropper::Event::Confirmed => confirm_crop(app),
    }
}

/// Rasterizes the confirmed selection and uploads the JPEG.
fn confirm_crop(app: &mut App) -> Task<Message> {
    if !app.avatar_flow.begin_upload() {
        return Task::none();
    }

    let Some(state) = app.cropper.take() else {
        app.avatar_flow.reset();
        return Task::none();
    };

    let jpeg = match state.into_selection().rasterize_jpeg() {
        Ok(jpeg) => jpeg,
        Err(err) => {
            app.avatar_flow.reset();
            app.notifications.push(
                Notification::error("notification-avatar-crop-failed")
                    .with_arg("reason", err.to_string()),
            );
            return Task::none();
        }
    };

    let Some(client) = app.api.clone() else {
        app.avatar_flow.reset();
        return Task::none();
    };
    Task::perform(
        async move { client.update_avatar(jpeg).await },
        Message::AvatarUploaded,
    )
}

fn handle_avatar_uploaded(app: &mut App, result: Result<User, ApiError>) -> Task<Message> {
    // The spinner clears for every outcome
    app.avatar_flow.reset();

    match result {
        Ok(user) => {
            let fetch = fetch_avatar_task(app, &user);
            app.session.commit(user);
            app.notifications
                .push(Notification::success("notification-avatar-updated"));
            fetch
        }
        Err(err) => {
            app.notifications.push(
                Notification::error("notification-avatar-update-failed")
                    .with_arg("reason", err.reason()),
            );
            Task::none()
        }
    }
}

fn send_verification(app: &mut App) -> Task<Message> {
    let Some(client) = app.api.clone() else {
        app.profile.verification_finished();
        return Task::none();
    };
    Task::perform(
        async move { client.send_email_verification().await },
        Message::VerificationSent,
    )
}

fn handle_verification_sent(app: &mut App, result: Result<(), ApiError>) -> Task<Message> {
    // The pending flag clears for every outcome
    app.profile.verification_finished();

    match result {
        Ok(()) => app
            .notifications
            .push(Notification::success("notification-verification-sent")),
        Err(err) => app.notifications.push(
            Notification::error("notification-verification-failed")
                .with_arg("reason", err.reason()),
        ),
    }
    Task::none()
}

fn handle_password_modal(app: &mut App, message: password_modal::Message) -> Task<Message> {
    let Some(state) = app.password_modal.as_mut() else {
        return Task::none();
    };

    match state.update(message) {
        password_modal::Event::None => Task::none(),
        password_modal::Event::Cancelled => {
            app.password_modal = None;
            Task::none()
        }
        password_modal::Event::Submitted(change) => change_password(app, change),
    }
}

fn change_password(app: &mut App, change: PasswordChange) -> Task<Message> {
    let Some(client) = app.api.clone() else {
        if let Some(state) = app.password_modal.as_mut() {
            state.submit_finished();
        }
        return Task::none();
    };
    Task::perform(
        async move { client.change_password(&change).await },
        Message::PasswordChanged,
    )
}

fn handle_password_changed(app: &mut App, result: Result<(), ApiError>) -> Task<Message> {
    match result {
        Ok(()) => {
            app.password_modal = None;
            app.notifications
                .push(Notification::success("notification-password-changed"));
        }
        Err(err) => {
            // Keep the dialog open so the user can correct the input
            if let Some(state) = app.password_modal.as_mut() {
                state.submit_finished();
            }
            app.notifications.push(
                Notification::error("notification-password-change-failed")
                    .with_arg("reason", err.reason()),
            );
        }
    }
    Task::none()
}

fn logout(app: &mut App) -> Task<Message> {
    let Some(client) = app.api.clone() else {
        return Task::none();
    };
    Task::perform(async move { client.logout().await }, Message::LoggedOut)
}

fn handle_logged_out(app: &mut App, result: Result<(), ApiError>) -> Task<Message> {
    match result {
        Ok(()) => {
            // The session is only cleared once the server confirms
            app.session.clear();
            app.screen = Screen::Landing;
            app.notifications
                .push(Notification::success("notification-logout-success"));
        }
        Err(err) => {
            app.notifications.push(
                Notification::error("notification-logout-failed")
                    .with_arg("reason", err.reason()),
            );
        }
    }
    Task::none()
}
