// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the session store, the API client,
//! localization, and the profile screen's components, and translates
//! messages into side effects like network requests or notifications.
//! Policy decisions (window sizing, which flag wins for the API base
//! URL) live here so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

#[cfg(test)]
mod tests;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api;
use crate::avatar;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::session::SessionStore;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{cropper, password_modal, profile};
use chrono::{DateTime, Local};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Spinner advance per 100 ms tick, in radians.
const SPINNER_STEP: f32 = 0.45;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    api: Option<api::Client>,
    session: SessionStore,
    screen: Screen,
    profile: profile::State,
    /// Where the avatar change flow currently stands.
    avatar_flow: avatar::Flow,
    /// Present exactly while `avatar_flow` is in the cropping step.
    cropper: Option<cropper::State>,
    password_modal: Option<password_modal::State>,
    avatar_view_open: bool,
    /// Decoded avatar bytes ready for display, fetched after each commit.
    avatar_handle: Option<iced::widget::image::Handle>,
    clock: DateTime<Local>,
    spinner_rotation: f32,
    /// True from launch until the initial profile fetch settles.
    loading: bool,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("authenticated", &self.session.is_authenticated())
            .field("avatar_flow", &self.avatar_flow)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            api: None,
            session: SessionStore::new(),
            screen: Screen::Profile,
            profile: profile::State::default(),
            avatar_flow: avatar::Flow::Idle,
            cropper: None,
            password_modal: None,
            avatar_view_open: false,
            avatar_handle: None,
            clock: Local::now(),
            spinner_rotation: 0.0,
            loading: false,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial profile
    /// fetch. A CLI `--api-base` override wins over the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (Config::default(), true),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_base
            .clone()
            .unwrap_or_else(|| config.api_base_url().to_string());

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        if config_warning {
            app.notifications.push(notifications::Notification::warning(
                "notification-config-load-warning",
            ));
        }

        let task = match api::Client::new(base_url) {
            Ok(client) => {
                app.api = Some(client.clone());
                app.loading = true;
                Task::perform(
                    async move { client.current_user().await },
                    Message::ProfileFetched,
                )
            }
            Err(err) => {
                app.notifications.push(
                    notifications::Notification::error("notification-profile-load-failed")
                        .with_arg("reason", err.reason()),
                );
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
