// SPDX-License-Identifier: MPL-2.0
//! Default values for toast configuration.

/// Auto-dismiss timeout applied when none is configured (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: i64 = 3000;

/// Whether the default card shows a close button.
pub const DEFAULT_SHOW_DISMISS_BUTTON: bool = true;

const _: () = {
    assert!(DEFAULT_TIMEOUT_MS > 0);
};
