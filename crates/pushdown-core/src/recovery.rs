//! Syntax error reporting window.

/// Where the parser stands with respect to the last syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    /// No recent error; the next one is reported.
    Normal,
    /// Recovering from an error; errors are silent until `shifts_left`
    /// more tokens have been shifted.
    Resynchronizing { shifts_left: u32 },
}

#[derive(Debug, Clone)]
pub(crate) struct Recovery {
    state: RecoveryState,
    window: u32,
}

impl Recovery {
    pub const fn new(window: u32) -> Self {
        Self {
            state: RecoveryState::Normal,
            window,
        }
    }

    pub const fn state(&self) -> RecoveryState {
        self.state
    }

    /// True if a syntax error seen now should be reported.
    pub const fn should_report(&self) -> bool {
        matches!(self.state, RecoveryState::Normal)
    }

    /// Starts (or restarts) the quiet window.
    pub fn enter(&mut self) {
        self.state = if self.window == 0 {
            RecoveryState::Normal
        } else {
            RecoveryState::Resynchronizing {
                shifts_left: self.window,
            }
        };
    }

    pub fn on_shift(&mut self) {
        if let RecoveryState::Resynchronizing { shifts_left } = self.state {
            self.state = if shifts_left <= 1 {
                RecoveryState::Normal
            } else {
                RecoveryState::Resynchronizing {
                    shifts_left: shifts_left - 1,
                }
            };
        }
    }

    pub fn reset(&mut self) {
        self.state = RecoveryState::Normal;
    }
}
