// SPDX-License-Identifier: MPL-2.0
//! Small shared UI building blocks.

pub mod modal;

pub use modal::modal;
