use std::time::Duration;

/// How long the "copied" confirmation stays up.
pub const COPIED_REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Identifies one scheduled revert. Only the newest epoch may clear `copied`.
pub type RevertEpoch = u64;

/// The transient "copied" flag and the epoch of its pending revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardFeedback {
    copied: bool,
    epoch: RevertEpoch,
    revert_pending: bool,
}

impl ClipboardFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn has_pending_revert(&self) -> bool {
        self.revert_pending
    }

    /// Marks a successful copy and returns the epoch to schedule the revert
    /// for. Any earlier epoch is superseded.
    pub fn mark_copied(&mut self) -> RevertEpoch {
        self.epoch += 1;
        self.copied = true;
        self.revert_pending = true;
        self.epoch
    }

    /// Applies an elapsed revert. Stale epochs and repeats change nothing.
    pub fn revert_elapsed(&mut self, epoch: RevertEpoch) -> bool {
        if !self.revert_pending || epoch != self.epoch {
            return false;
        }
        self.copied = false;
        self.revert_pending = false;
        true
    }

    /// Drops the confirmation immediately. Returns whether a revert was
    /// pending and should be cancelled.
    pub fn reset(&mut self) -> bool {
        let had_pending = self.revert_pending;
        self.copied = false;
        self.revert_pending = false;
        if had_pending {
            // A late timer from before the reset must not match.
            self.epoch += 1;
        }
        had_pending
    }
}
