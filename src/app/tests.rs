// SPDX-License-Identifier: MPL-2.0
//! Update-loop tests driving the application through message sequences.

use super::update::update;
use super::{App, Message, Screen};
use crate::api;
use crate::api::types::User;
use crate::avatar;
use crate::error::{ApiError, Error};
use crate::ui::profile;

fn sample_user() -> User {
    serde_json::from_value(serde_json::json!({
        "username": "marguerite",
        "email": "marguerite@example.org",
        "firstname": "Marguerite",
        "bio": "Writer.",
        "isEmailVerified": false
    }))
    .unwrap()
}

/// An app with a committed session and a client that never gets used
/// (tasks are returned but not executed by these tests).
fn app_with_session() -> App {
    let mut app = App::default();
    app.api = Some(api::Client::new("http://localhost:9").unwrap());
    app.session.commit(sample_user());
    app
}

/// Runs one update, discarding the returned task (these tests never
/// execute futures; results are injected as messages instead).
fn apply(app: &mut App, message: Message) {
    let _ = update(app, message);
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: Some("boom".to_string()),
    }
}

#[test]
fn successful_save_commits_record_and_exits_edit_mode() {
    let mut app = app_with_session();
    apply(&mut app, Message::Profile(profile::Message::EditPressed));
    apply(
        &mut app,
        Message::Profile(profile::Message::BioChanged("Novelist.".to_string())),
    );
    apply(&mut app, Message::Profile(profile::Message::SavePressed));

    let mut saved = sample_user();
    saved.bio = Some("Novelist.".to_string());
    apply(&mut app, Message::ProfileSaved(Ok(saved)));

    assert!(!app.profile.is_editing());
    assert_eq!(
        app.session.user().unwrap().bio.as_deref(),
        Some("Novelist.")
    );
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn failed_save_keeps_edit_mode_and_cached_record() {
    let mut app = app_with_session();
    apply(&mut app, Message::Profile(profile::Message::EditPressed));
    apply(
        &mut app,
        Message::Profile(profile::Message::BioChanged("Novelist.".to_string())),
    );
    apply(&mut app, Message::Profile(profile::Message::SavePressed));

    apply(&mut app, Message::ProfileSaved(Err(server_error())));

    assert!(app.profile.is_editing());
    assert_eq!(app.session.user().unwrap().bio.as_deref(), Some("Writer."));
}

#[test]
fn cancel_discards_draft_without_touching_session() {
    let mut app = app_with_session();
    apply(&mut app, Message::Profile(profile::Message::EditPressed));
    apply(
        &mut app,
        Message::Profile(profile::Message::FirstnameChanged("Changed".to_string())),
    );
    apply(&mut app, Message::Profile(profile::Message::CancelPressed));

    assert!(!app.profile.is_editing());
    assert_eq!(
        app.session.user().unwrap().firstname.as_deref(),
        Some("Marguerite")
    );
}

#[test]
fn invalid_dob_surfaces_warning_and_stays_editing() {
    let mut app = app_with_session();
    apply(&mut app, Message::Profile(profile::Message::EditPressed));
    apply(
        &mut app,
        Message::Profile(profile::Message::DobChanged("not-a-date".to_string())),
    );
    apply(&mut app, Message::Profile(profile::Message::SavePressed));

    assert!(app.profile.is_editing());
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn rejected_file_type_resets_the_avatar_flow() {
    let mut app = app_with_session();
    apply(&mut app, Message::ChangeAvatarPressed);
    assert_eq!(app.avatar_flow, avatar::Flow::Selecting);

    apply(
        &mut app,
        Message::AvatarSourceLoaded(Err(Error::UnsupportedImageFormat)),
    );

    assert_eq!(app.avatar_flow, avatar::Flow::Idle);
    assert!(app.cropper.is_none());
    assert!(app.avatar_handle.is_none());
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn dismissed_file_picker_resets_the_avatar_flow() {
    let mut app = app_with_session();
    apply(&mut app, Message::ChangeAvatarPressed);

    apply(&mut app, Message::AvatarFileSelected(None));

    assert_eq!(app.avatar_flow, avatar::Flow::Idle);
}

#[test]
fn loaded_source_opens_the_cropper() {
    let mut app = app_with_session();
    apply(&mut app, Message::ChangeAvatarPressed);

    let source = Box::new(image_rs::DynamicImage::new_rgb8(64, 64));
    apply(&mut app, Message::AvatarSourceLoaded(Ok(source)));

    assert_eq!(app.avatar_flow, avatar::Flow::Cropping);
    assert!(app.cropper.is_some());
}

#[test]
fn avatar_upload_failure_clears_the_spinner() {
    let mut app = app_with_session();
    app.avatar_flow.begin_selection();
    app.avatar_flow.begin_cropping();
    app.avatar_flow.begin_upload();

    apply(&mut app, Message::AvatarUploaded(Err(server_error())));

    assert_eq!(app.avatar_flow, avatar::Flow::Idle);
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn avatar_upload_success_commits_the_server_record() {
    let mut app = app_with_session();
    app.avatar_flow.begin_selection();
    app.avatar_flow.begin_cropping();
    app.avatar_flow.begin_upload();

    let mut updated = sample_user();
    updated.avatar = Some("http://localhost:9/media/avatar.jpeg".to_string());
    apply(&mut app, Message::AvatarUploaded(Ok(updated)));

    assert_eq!(app.avatar_flow, avatar::Flow::Idle);
    assert!(app.session.user().unwrap().has_avatar());
}

#[test]
fn verification_flag_clears_on_both_outcomes() {
    let mut app = app_with_session();

    apply(
        &mut app,
        Message::Profile(profile::Message::SendVerificationPressed),
    );
    assert!(app.profile.is_verifying());
    apply(&mut app, Message::VerificationSent(Err(server_error())));
    assert!(!app.profile.is_verifying());

    apply(
        &mut app,
        Message::Profile(profile::Message::SendVerificationPressed),
    );
    assert!(app.profile.is_verifying());
    apply(&mut app, Message::VerificationSent(Ok(())));
    assert!(!app.profile.is_verifying());
}

#[test]
fn logout_success_clears_session_and_lands() {
    let mut app = app_with_session();

    apply(&mut app, Message::LoggedOut(Ok(())));

    assert_eq!(app.screen, Screen::Landing);
    assert!(!app.session.is_authenticated());
}

#[test]
fn logout_failure_keeps_the_session() {
    let mut app = app_with_session();

    apply(&mut app, Message::LoggedOut(Err(server_error())));

    assert_eq!(app.screen, Screen::Profile);
    assert!(app.session.is_authenticated());
}

#[test]
fn password_change_failure_keeps_the_dialog_open() {
    let mut app = app_with_session();
    apply(
        &mut app,
        Message::Profile(profile::Message::ChangePasswordPressed),
    );
    assert!(app.password_modal.is_some());

    apply(&mut app, Message::PasswordChanged(Err(server_error())));
    assert!(app.password_modal.is_some());

    apply(&mut app, Message::PasswordChanged(Ok(())));
    assert!(app.password_modal.is_none());
}

#[test]
fn fetch_failure_stops_the_loading_indicator() {
    let mut app = App::default();
    app.loading = true;

    apply(&mut app, Message::ProfileFetched(Err(server_error())));

    assert!(!app.loading);
    assert!(!app.session.is_authenticated());
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn fetch_success_commits_the_user() {
    let mut app = App::default();
    app.loading = true;

    apply(&mut app, Message::ProfileFetched(Ok(sample_user())));

    assert!(!app.loading);
    assert!(app.session.is_authenticated());
}
