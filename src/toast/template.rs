// SPDX-License-Identifier: MPL-2.0
//! Custom toast renderers.

use super::Toast;
use crate::ui::Message;
use iced::Element;

/// Renders a toast in place of the default title/message card.
///
/// The whole toast is handed over, extension fields included. A template
/// that offers a close control should emit [`Message::Dismiss`] with the
/// toast's id.
pub trait Template: Send + Sync {
    fn view<'a>(&'a self, toast: &'a Toast) -> Element<'a, Message>;
}

/// Which rendering a toast asks for.
pub enum Layout<'a> {
    /// Built-in card. Either field may be absent.
    Default {
        title: Option<&'a str>,
        message: Option<&'a str>,
    },
    /// Caller-supplied renderer.
    Custom(&'a dyn Template),
}

impl Layout<'_> {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Layout::Custom(_))
    }
}
