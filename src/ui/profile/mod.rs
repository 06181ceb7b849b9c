// SPDX-License-Identifier: MPL-2.0
//! Profile screen component.
//!
//! Renders the signed-in user's details and hosts the edit flow. The
//! component follows "state down, messages up": it owns the form draft
//! and per-action pending flags, and reports anything that needs a
//! network request or a collaborator (cropper, password modal) to the
//! application as an [`Event`].

mod view;

use crate::api::types::{ProfileUpdate, User};
use chrono::NaiveDate;

pub use view::{view, ViewContext};

/// Maximum bio length in characters.
pub const BIO_MAX_CHARS: usize = 250;

/// Messages produced by the profile screen's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    EditPressed,
    CancelPressed,
    SavePressed,
    FirstnameChanged(String),
    LastnameChanged(String),
    BioChanged(String),
    DobChanged(String),
    AvatarPressed,
    ChangePasswordPressed,
    SendVerificationPressed,
    LogoutPressed,
}

/// Events reported to the parent for handling outside this component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The draft passed local validation and should be sent to the server.
    SaveRequested(ProfileUpdate),
    /// The draft's date of birth is not a valid YYYY-MM-DD date.
    DobRejected,
    AvatarViewRequested,
    PasswordModalRequested,
    VerificationRequested,
    LogoutRequested,
}

/// Local, uncommitted copy of the editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub firstname: String,
    pub lastname: String,
    pub bio: String,
    pub dob: String,
}

impl Draft {
    pub fn from_user(user: &User) -> Self {
        Self {
            firstname: user.firstname.clone().unwrap_or_default(),
            lastname: user.lastname.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            dob: user.dob.clone().unwrap_or_default(),
        }
    }

    /// Replaces the bio, truncating at [`BIO_MAX_CHARS`] characters.
    pub fn set_bio(&mut self, bio: String) {
        if bio.chars().count() <= BIO_MAX_CHARS {
            self.bio = bio;
        } else {
            self.bio = bio.chars().take(BIO_MAX_CHARS).collect();
        }
    }

    pub fn bio_remaining(&self) -> usize {
        BIO_MAX_CHARS - self.bio.chars().count()
    }

    /// An empty date of birth is allowed; anything else must parse.
    pub fn dob_is_valid(&self) -> bool {
        self.dob.is_empty() || NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d").is_ok()
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            bio: self.bio.clone(),
            dob: self.dob.clone(),
        }
    }
}

/// Profile screen state. The cached user record itself lives in the
/// session store; this holds only presentation state.
#[derive(Debug, Default)]
pub struct State {
    editing: bool,
    draft: Draft,
    saving: bool,
    verifying: bool,
}

impl State {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Commits the outcome of a save request. Success exits edit mode;
    /// failure keeps the draft and edit mode intact.
    pub fn save_finished(&mut self, success: bool) {
        self.saving = false;
        if success {
            self.editing = false;
        }
    }

    /// Clears the verification-pending flag. Called for every outcome.
    pub fn verification_finished(&mut self) {
        self.verifying = false;
    }

    pub fn update(&mut self, message: Message, user: &User) -> Event {
        match message {
            Message::EditPressed => {
                self.draft = Draft::from_user(user);
                self.editing = true;
                Event::None
            }
            Message::CancelPressed => {
                self.draft = Draft::default();
                self.editing = false;
                Event::None
            }
            Message::SavePressed => {
                if self.saving {
                    return Event::None;
                }
                if !self.draft.dob_is_valid() {
                    return Event::DobRejected;
                }
                self.saving = true;
                Event::SaveRequested(self.draft.to_update())
            }
            Message::FirstnameChanged(value) => {
                self.draft.firstname = value;
                Event::None
            }
            Message::LastnameChanged(value) => {
                self.draft.lastname = value;
                Event::None
            }
            Message::BioChanged(value) => {
                self.draft.set_bio(value);
                Event::None
            }
            Message::DobChanged(value) => {
                self.draft.dob = value;
                Event::None
            }
            Message::AvatarPressed => Event::AvatarViewRequested,
            Message::ChangePasswordPressed => {
                if user.uses_third_party_login() {
                    Event::None
                } else {
                    Event::PasswordModalRequested
                }
            }
            Message::SendVerificationPressed => {
                if self.verifying || user.is_email_verified {
                    return Event::None;
                }
                self.verifying = true;
                Event::VerificationRequested
            }
            Message::LogoutPressed => Event::LogoutRequested,
        }
    }
}
