/// Fraction of the sentinel that must be on screen to count as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Turns raw sentinel visibility reports into "crossed into view" signals.
///
/// The trigger only fires while observing. A report fires when the sentinel
/// goes from hidden to visible, or when it is visible on the first report after
/// [`VisibilityTrigger::rearm`] (a freshly attached observer reports the
/// current state once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityTrigger {
    observing: bool,
    visible: bool,
    rearmed: bool,
}

impl VisibilityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Starts observing. Returns `false` if already observing.
    pub fn observe(&mut self) -> bool {
        if self.observing {
            return false;
        }
        self.observing = true;
        self.visible = false;
        self.rearmed = true;
        true
    }

    /// Stops observing. Returns `false` if nothing was observed.
    pub fn release(&mut self) -> bool {
        if !self.observing {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn rearm(&mut self) {
        if self.observing {
            self.rearmed = true;
        }
    }

    /// Records a visibility ratio and reports whether it counts as a crossing.
    pub fn report(&mut self, ratio: f32) -> bool {
        if !self.observing {
            return false;
        }
        let now_visible = ratio >= VISIBILITY_THRESHOLD;
        let fired = now_visible && (!self.visible || self.rearmed);
        self.visible = now_visible;
        self.rearmed = false;
        fired
    }
}
