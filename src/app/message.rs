// SPDX-License-Identifier: MPL-2.0
//! Application-level messages and launch flags.

use crate::api::types::User;
use crate::error::{ApiError, Error};
use crate::ui::{cropper, notifications, password_modal, profile};
use std::path::PathBuf;
use std::time::Instant;

/// Launch parameters parsed from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
    /// API base URL override, e.g. `--api-base http://localhost:8000`.
    pub api_base: Option<String>,
}

/// All messages flowing through the application update loop.
#[derive(Debug, Clone)]
pub enum Message {
    // Component messages
    Profile(profile::Message),
    Cropper(cropper::Message),
    PasswordModal(password_modal::Message),
    Notification(notifications::NotificationMessage),

    // Avatar view dialog
    AvatarViewDismissed,
    ChangeAvatarPressed,

    // Asynchronous results
    ProfileFetched(Result<User, ApiError>),
    ProfileSaved(Result<User, ApiError>),
    AvatarFileSelected(Option<PathBuf>),
    AvatarSourceLoaded(Result<Box<image_rs::DynamicImage>, Error>),
    AvatarUploaded(Result<User, ApiError>),
    AvatarBytesFetched(Result<Vec<u8>, ApiError>),
    VerificationSent(Result<(), ApiError>),
    PasswordChanged(Result<(), ApiError>),
    LoggedOut(Result<(), ApiError>),

    // Timers
    Tick(Instant),
    ClockTick(Instant),
}
