// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` describes transient on-screen notifications for Iced
//! applications.
//!
//! A [`Toast`] carries identity, stacking order, timing, optional title and
//! message, an optional custom [`Template`], a [`Dismiss`] callback and free
//! extension fields. The [`ui`] module renders it and turns a close click
//! back into a dismissal. Queueing toasts and firing their timeouts stays
//! with the application.

pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

pub use error::{Error, Result};
pub use toast::{
    Dismiss, Extensions, Layout, Template, Timeout, Toast, ToastId, ToastSnapshot,
};
