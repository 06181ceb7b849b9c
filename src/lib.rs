// SPDX-License-Identifier: MPL-2.0
//! `iced_profile` is a desktop account-profile client built with the Iced
//! GUI framework.
//!
//! It fetches the signed-in user from a remote HTTP API, renders editable
//! profile details with avatar cropping and upload, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_profile/0.2.0")]

pub mod api;
pub mod app;
pub mod avatar;
pub mod config;
pub mod error;
pub mod greeting;
pub mod i18n;
pub mod session;
pub mod ui;
