//! Intended UI updates returned by the controller flows.
//!
//! The controller never touches a page itself; each flow reports what the
//! embedding UI should do next, which keeps every flow checkable in tests.

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_VISIBLE_MS: u64 = 3000;

/// Delay before a scheduled reload, long enough to read the toast first.
pub const RELOAD_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Showing one replaces whatever toast is
/// currently visible; there is no stacking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show (or replace) the toast.
    Toast(Toast),
    /// Blank the three editable form fields.
    ClearForm,
    /// Drop the row with this id from the table.
    RemoveRow { id: u64 },
    /// Rewrite a row's displayed cells in place. Times are 12-hour text.
    PatchRow {
        id: u64,
        start_time: String,
        end_time: String,
        description: String,
    },
    /// Reload the page after `delay_ms`.
    ScheduleReload { delay_ms: u64 },
    /// Full page navigation, the one non-ajax interaction.
    Navigate { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_stays_visible_past_the_scheduled_reload() {
        assert!(TOAST_VISIBLE_MS > RELOAD_DELAY_MS);
    }
}
