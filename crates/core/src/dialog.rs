//! Two-state machine for the modal dialogs on the home page.
//!
//! ```text
//!            DetailsReceived / LoginRequired
//!   Closed ─────────────────────────────────▶ Open
//!     ▲                                         │
//!     └──────────────── Dismissed ──────────────┘
//! ```

/// Whether a dialog is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Input to [`DialogState::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// Product details arrived (non-null).
    DetailsReceived,
    /// A cart mutation was attempted without a session user.
    LoginRequired,
    /// The user closed the dialog.
    Dismissed,
}

impl DialogState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Apply an event and return the next state.
    #[must_use]
    pub const fn on(self, event: DialogEvent) -> Self {
        match event {
            DialogEvent::DetailsReceived | DialogEvent::LoginRequired => Self::Open,
            DialogEvent::Dismissed => Self::Closed,
        }
    }

    /// Apply an event in place, returning whether the state changed.
    pub fn apply(&mut self, event: DialogEvent) -> bool {
        let next = self.on(event);
        let changed = *self != next;
        *self = next;
        changed
    }
}
