// SPDX-License-Identifier: MPL-2.0
//! The toast record.
//!
//! A [`Toast`] is plain data handed from whoever manages notifications to
//! whoever draws them. It does not queue, time out or remove itself; it only
//! carries what is needed to do so, plus a [`Dismiss`] callback leading back
//! to the owner.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{Dismiss, Timeout, Toast, ToastId};
//!
//! let toast = Toast::new(ToastId::generate(), 0, Timeout::default(), chrono::Utc::now(), Dismiss::noop())
//!     .with_title("Export")
//!     .with_message("Saved")
//!     .with_extension("progress", 100);
//! ```

mod dismiss;
mod extensions;
mod id;
mod template;
mod timeout;

pub use dismiss::Dismiss;
pub use extensions::Extensions;
pub use id::ToastId;
pub use template::{Layout, Template};
pub use timeout::Timeout;

use crate::error::{Error, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// One notification as handed to a renderer.
#[derive(Clone)]
pub struct Toast {
    id: ToastId,
    /// Stacking order among visible toasts; meaning is up to the owner.
    index: u32,
    timeout: Timeout,
    /// When the toast was created.
    timestamp: DateTime<Utc>,
    title: Option<String>,
    message: Option<String>,
    template: Option<Arc<dyn Template>>,
    dismiss: Dismiss,
    extensions: Extensions,
}

impl Toast {
    /// Creates a toast from its required fields.
    ///
    /// ```
    /// use iced_toast::{Dismiss, Timeout, Toast};
    ///
    /// let toast = Toast::new("t1", 0, Timeout::default(), chrono::Utc::now(), Dismiss::noop());
    /// assert_eq!(toast.id().as_str(), "t1");
    /// ```
    ///
    /// Leaving out a required field does not compile:
    ///
    /// ```compile_fail
    /// use iced_toast::{Timeout, Toast};
    ///
    /// let toast = Toast::new("t1", 0, Timeout::default(), chrono::Utc::now());
    /// ```
    ///
    /// Nor can the fields be filled in directly from outside the crate:
    ///
    /// ```compile_fail
    /// use iced_toast::{Dismiss, Extensions, Timeout, Toast, ToastId};
    ///
    /// let toast = Toast {
    ///     id: ToastId::new("t1"),
    ///     index: 0,
    ///     timeout: Timeout::Never,
    ///     timestamp: chrono::Utc::now(),
    ///     title: None,
    ///     message: None,
    ///     template: None,
    ///     dismiss: Dismiss::noop(),
    ///     extensions: Extensions::new(),
    /// };
    /// ```
    pub fn new(
        id: impl Into<ToastId>,
        index: u32,
        timeout: Timeout,
        timestamp: DateTime<Utc>,
        dismiss: Dismiss,
    ) -> Self {
        Self {
            id: id.into(),
            index,
            timeout,
            timestamp,
            title: None,
            message: None,
            template: None,
            dismiss,
            extensions: Extensions::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the default card with a custom renderer.
    #[must_use]
    pub fn with_template(mut self, template: impl Template + 'static) -> Self {
        self.template = Some(Arc::new(template));
        self
    }

    /// Attaches an extra named field.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key, value);
        self
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Moves the toast in the stack, e.g. after a toast above it was removed.
    pub fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn template(&self) -> Option<&dyn Template> {
        self.template.as_deref()
    }

    #[must_use]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    /// Asks the owner to remove this toast.
    pub fn dismiss(&self) {
        tracing::debug!(toast_id = %self.id, "toast dismissal requested");
        self.dismiss.call();
    }

    /// Picks the custom template when one is set, the default card otherwise.
    #[must_use]
    pub fn layout(&self) -> Layout<'_> {
        match self.template.as_deref() {
            Some(template) => Layout::Custom(template),
            None => Layout::Default {
                title: self.title(),
                message: self.message(),
            },
        }
    }

    /// Returns when the toast should auto-dismiss, `None` if it never does.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let duration = self.timeout.duration()?;
        let delta = TimeDelta::from_std(duration).ok()?;
        self.timestamp.checked_add_signed(delta)
    }

    /// Returns whether the timeout has run out at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|deadline| now >= deadline)
    }

    /// Checks the fields a constructing component is expected to get right.
    ///
    /// Missing title, message or template is fine; only an empty id is
    /// rejected.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(Error::InvalidToast("id must not be empty".to_string()));
        }
        Ok(())
    }

    /// Serializable view of the toast, without the callback and template.
    #[must_use]
    pub fn snapshot(&self) -> ToastSnapshot {
        ToastSnapshot {
            id: self.id.clone(),
            index: self.index,
            timeout: self.timeout,
            timestamp: self.timestamp,
            title: self.title.clone(),
            message: self.message.clone(),
            has_template: self.template.is_some(),
            extensions: self.extensions.clone(),
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("timeout", &self.timeout)
            .field("timestamp", &self.timestamp)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("template", &self.template.is_some())
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

/// Plain-data copy of a [`Toast`], suitable for logging or sending elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub index: u32,
    /// Milliseconds; `0` means the toast never auto-dismisses.
    pub timeout: Timeout,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub has_template: bool,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Message;
    use chrono::TimeZone;
    use iced::widget::text;
    use iced::Element;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct Badge;

    impl Template for Badge {
        fn view<'a>(&'a self, toast: &'a Toast) -> Element<'a, Message> {
            text(toast.id().as_str()).into()
        }
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn minimal() -> Toast {
        Toast::new("t1", 0, Timeout::from_millis(3000), created(), Dismiss::noop())
    }

    #[test]
    fn required_fields_only_is_valid() {
        let toast = minimal();
        assert!(toast.validate().is_ok());
        assert!(toast.title().is_none());
        assert!(toast.message().is_none());
        assert!(toast.template().is_none());
        assert!(toast.extensions().is_empty());
    }

    #[test]
    fn optional_fields_keep_toast_valid() {
        let toast = minimal()
            .with_title("Export")
            .with_message("Saved")
            .with_template(Badge);
        assert!(toast.validate().is_ok());
        assert_eq!(toast.title(), Some("Export"));
        assert_eq!(toast.message(), Some("Saved"));
        assert!(toast.template().is_some());
    }

    #[test]
    fn extra_fields_keep_toast_valid() {
        let toast = minimal().with_extension("progress", 42);
        assert!(toast.validate().is_ok());
        assert_eq!(toast.extensions().get_as::<u32>("progress").unwrap(), Some(42));
    }

    #[test]
    fn empty_id_fails_validation() {
        let toast = Toast::new("  ", 0, Timeout::Never, created(), Dismiss::noop());
        assert!(matches!(toast.validate(), Err(Error::InvalidToast(_))));
    }

    #[test]
    fn dismiss_sets_flag() {
        let removed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&removed);
        let toast = Toast::new(
            "t1",
            0,
            Timeout::from_millis(3000),
            Utc::now(),
            Dismiss::new(move || flag.store(true, Ordering::SeqCst)),
        )
        .with_message("Saved");

        let () = toast.dismiss();
        assert!(removed.load(Ordering::SeqCst));
    }

    #[test]
    fn dismiss_invokes_callback_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let toast = Toast::new(
            "t1",
            0,
            Timeout::Never,
            created(),
            Dismiss::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        toast.dismiss();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        toast.dismiss();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn layout_is_default_without_template() {
        let toast = minimal().with_title("Heads up");
        match toast.layout() {
            Layout::Default { title, message } => {
                assert_eq!(title, Some("Heads up"));
                assert_eq!(message, None);
            }
            Layout::Custom(_) => panic!("expected default layout"),
        }
    }

    #[test]
    fn layout_is_custom_with_template() {
        let toast = minimal().with_message("ignored by template").with_template(Badge);
        assert!(toast.layout().is_custom());
    }

    #[test]
    fn expiry_follows_timeout() {
        let toast = minimal();
        let deadline = created() + TimeDelta::milliseconds(3000);
        assert_eq!(toast.expires_at(), Some(deadline));
        assert!(!toast.is_expired_at(deadline - TimeDelta::milliseconds(1)));
        assert!(toast.is_expired_at(deadline));
    }

    #[test]
    fn never_timeout_never_expires() {
        let toast = Toast::new("sticky", 0, Timeout::from_millis(0), created(), Dismiss::noop());
        assert_eq!(toast.expires_at(), None);
        assert!(!toast.is_expired_at(created() + TimeDelta::days(365)));
    }

    #[test]
    fn sub_millisecond_timeout_survives_snapshot() {
        let toast = Toast::new(
            "t1",
            0,
            Timeout::from(std::time::Duration::from_micros(500)),
            created(),
            Dismiss::noop(),
        );
        let json = serde_json::to_string(&toast.snapshot()).unwrap();
        let back: ToastSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.timeout, toast.timeout());
        assert!(!back.timeout.is_never());
    }

    #[test]
    fn zero_after_timeout_never_expires() {
        let toast = Toast::new(
            "t1",
            0,
            Timeout::After(std::time::Duration::ZERO),
            created(),
            Dismiss::noop(),
        );
        assert_eq!(toast.expires_at(), None);
        assert!(!toast.is_expired_at(created()));
    }

    #[test]
    fn set_index_restacks() {
        let mut toast = minimal();
        toast.set_index(4);
        assert_eq!(toast.index(), 4);
    }

    #[test]
    fn snapshot_serializes_data_fields() {
        let toast = minimal()
            .with_message("Saved")
            .with_template(Badge)
            .with_extension("action", "Undo");
        let json = serde_json::to_value(toast.snapshot()).unwrap();

        assert_eq!(json["id"], "t1");
        assert_eq!(json["index"], 0);
        assert_eq!(json["timeout"], 3000);
        assert_eq!(json["message"], "Saved");
        assert_eq!(json["has_template"], true);
        assert_eq!(json["extensions"]["action"], "Undo");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn debug_omits_callback_body() {
        let rendered = format!("{:?}", minimal());
        assert!(rendered.contains("\"t1\""));
        assert!(rendered.contains(".."));
    }
}
