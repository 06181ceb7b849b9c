// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, components, widgets, styling.

pub mod components;
pub mod cropper;
pub mod design_tokens;
pub mod notifications;
pub mod password_modal;
pub mod profile;
pub mod styles;
pub mod theming;
pub mod widgets;
