// SPDX-License-Identifier: MPL-2.0
/// Top-level screens the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The profile screen, shown while a session is active.
    Profile,
    /// The signed-out landing screen, shown after a successful logout.
    Landing,
}
