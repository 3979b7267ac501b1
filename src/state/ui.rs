#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state for the shell: dark mode and the mobile sidebar.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

/// Toast severity. Every request outcome maps onto one of these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification shown in the toast stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue shared app-wide via context.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        id
    }

    /// Dismissing an already-gone toast is a no-op; the auto-dismiss timer
    /// may race a manual close.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Settle a mutation outcome into the toast queue.
///
/// Returns whether the caller should refetch its list: exactly once on
/// success, never on failure. The list is always refreshed from the backend
/// rather than patched locally.
pub fn finish_mutation(
    outcome: Result<(), String>,
    success_message: &str,
    toasts: &mut Toasts,
) -> bool {
    match outcome {
        Ok(()) => {
            toasts.success(success_message);
            true
        }
        Err(message) => {
            toasts.error(message);
            false
        }
    }
}
