// SPDX-License-Identifier: MPL-2.0
//! Renderer side of the toast contract.
//!
//! Follows the Elm-style "state down, messages up" pattern: [`view`] turns a
//! [`Toast`] into an element emitting [`Message`]s, and [`update`] routes a
//! dismiss message back to the toast's callback. Keeping the list of active
//! toasts, and deciding where they sit on screen, is left to the caller.
//!
//! ```ignore
//! fn view(&self) -> Element<'_, AppMessage> {
//!     column(self.toasts.iter().map(|t| iced_toast::ui::view(t).map(AppMessage::Toast))).into()
//! }
//!
//! fn update(&mut self, AppMessage::Toast(message): AppMessage) {
//!     for toast in &self.toasts {
//!         iced_toast::ui::update(toast, &message);
//!     }
//! }
//! ```

mod card;
pub mod design_tokens;

use crate::config::Config;
use crate::toast::{Layout, Toast, ToastId};
use iced::Element;

/// Messages emitted by toast views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user asked to close the toast with this id.
    Dismiss(ToastId),
}

/// Renders a toast with default settings.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    view_with(toast, &Config::default())
}

/// Renders a toast, using its template when it has one.
pub fn view_with<'a>(toast: &'a Toast, config: &Config) -> Element<'a, Message> {
    match toast.layout() {
        Layout::Custom(template) => template.view(toast),
        Layout::Default { title, message } => {
            card::view(toast.id(), title, message, config.show_dismiss_button())
        }
    }
}

/// Handles a message for `toast`.
///
/// Returns `true` if the message targeted this toast and its dismiss
/// callback was invoked.
pub fn update(toast: &Toast, message: &Message) -> bool {
    match message {
        Message::Dismiss(id) if id == toast.id() => {
            toast.dismiss();
            true
        }
        Message::Dismiss(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Dismiss, Template, Timeout};
    use chrono::Utc;
    use iced::widget::text;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting(Arc<AtomicUsize>);

    impl Template for Counting {
        fn view<'a>(&'a self, toast: &'a Toast) -> Element<'a, Message> {
            self.0.fetch_add(1, Ordering::SeqCst);
            text(toast.message().unwrap_or_default()).into()
        }
    }

    fn counting_toast(id: &str, calls: &Arc<AtomicUsize>) -> Toast {
        let counter = Arc::clone(calls);
        Toast::new(
            id,
            0,
            Timeout::Never,
            Utc::now(),
            Dismiss::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn update_dismisses_matching_toast() {
        let calls = Arc::new(AtomicUsize::new(0));
        let toast = counting_toast("t1", &calls);

        assert!(update(&toast, &Message::Dismiss(ToastId::new("t1"))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_ignores_other_toasts() {
        let calls = Arc::new(AtomicUsize::new(0));
        let toast = counting_toast("t1", &calls);

        assert!(!update(&toast, &Message::Dismiss(ToastId::new("t2"))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn view_uses_template_when_present() {
        let renders = Arc::new(AtomicUsize::new(0));
        let toast = Toast::new("t1", 0, Timeout::Never, Utc::now(), Dismiss::noop())
            .with_message("Saved")
            .with_template(Counting(Arc::clone(&renders)));

        let _ = view(&toast);
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn view_renders_default_card_without_template() {
        let toast = Toast::new("t1", 0, Timeout::Never, Utc::now(), Dismiss::noop())
            .with_title("Export");
        let _ = view(&toast);
        let _ = view_with(
            &toast,
            &Config {
                show_dismiss_button: Some(false),
                ..Config::default()
            },
        );
    }
}
