// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the account API.
//!
//! One thin wrapper around `reqwest` with the base URL baked in. All calls
//! are credentialed through the client's cookie store, so the session cookie
//! set at login time rides along automatically. Errors are normalized into
//! [`ApiError`]: the server's `{ message }` body when it can be parsed,
//! otherwise a generic status-coded fallback.

pub mod types;

use crate::error::ApiError;
use reqwest::multipart;
pub use types::{Envelope, ErrorBody, PasswordChange, ProfileUpdate, User};

/// Filename sent with the multipart avatar field. The cropper always
/// produces JPEG, so the name is fixed.
const AVATAR_UPLOAD_FILENAME: &str = "avatar.jpeg";

/// Client for the account endpoints under a single base URL.
///
/// Cloning is cheap (`reqwest::Client` is an `Arc` internally), so the
/// client can be moved into `Task::perform` futures freely.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("IcedProfile/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `/api/v1/users/current-user`: fetches the authenticated user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/v1/users/current-user"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_user(response).await
    }

    /// POST `/api/v1/users/edit-profile`: saves the full form draft and
    /// returns the server's updated record.
    pub async fn edit_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/v1/users/edit-profile"))
            .json(update)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_user(response).await
    }

    /// POST `/api/v1/users/update-avatar`: uploads a cropped JPEG as the
    /// multipart field `avatar` and returns the updated record.
    pub async fn update_avatar(&self, jpeg: Vec<u8>) -> Result<User, ApiError> {
        let part = multipart::Part::bytes(jpeg)
            .file_name(AVATAR_UPLOAD_FILENAME)
            .mime_str("image/jpeg")
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = multipart::Form::new().part("avatar", part);

        let response = self
            .http
            .post(self.endpoint("/api/v1/users/update-avatar"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_user(response).await
    }

    /// POST `/api/v1/users/logout`: ends the server session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/v1/users/logout"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }

    /// POST `/api/v1/users/send-email-verification`: asks the server to
    /// send a verification mail for the account's address.
    pub async fn send_email_verification(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/v1/users/send-email-verification"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }

    /// POST `/api/v1/users/change-password`.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/v1/users/change-password"))
            .json(change)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }

    /// Fetches raw avatar bytes for display. The avatar URL may point at a
    /// CDN outside the API base, so it is used verbatim.
    pub async fn fetch_avatar(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Maps a non-2xx response to [`ApiError::Status`], parsing the body as
/// `{ message }` when possible.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Decodes a `{ data: User }` envelope after the status check.
async fn decode_user(response: reqwest::Response) -> Result<User, ApiError> {
    let response = check_status(response).await?;
    let envelope = response
        .json::<Envelope<User>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}
