// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// The minute clock always runs; the fast tick only while something
/// animated or auto-dismissing is on screen.
pub fn subscription(app: &App) -> Subscription<Message> {
    let clock = time::every(Duration::from_secs(60)).map(Message::ClockTick);

    let needs_fast_tick =
        app.notifications.has_notifications() || app.avatar_flow.is_uploading() || app.loading;

    let tick = if needs_fast_tick {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([clock, tick])
}
