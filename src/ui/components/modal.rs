// SPDX-License-Identifier: MPL-2.0
//! Modal overlay helper.
//!
//! Stacks a dialog over the base view with a dimmed, click-to-dismiss
//! backdrop. The dialog itself is opaque so clicks inside it don't fall
//! through to the backdrop.

use crate::ui::styles::container as container_styles;
use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_backdrop: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(dialog)).style(container_styles::modal_backdrop)
            )
            .on_press(on_backdrop)
        )
    ]
    .into()
}
