use std::ops::Range;

/// A fixed-height window over the list. The load-more sentinel occupies the
/// line right after the last row when it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    offset: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            height: height.max(1),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible_rows(&self, row_count: usize) -> Range<usize> {
        let start = self.offset.min(row_count);
        let end = self.offset.saturating_add(self.height).min(row_count);
        start..end
    }

    /// Lines the sentinel occupies inside the window, as a fraction of its
    /// one-line height.
    pub fn sentinel_ratio(&self, row_count: usize) -> f32 {
        let sentinel_line = row_count;
        if sentinel_line >= self.offset && sentinel_line < self.offset.saturating_add(self.height) {
            1.0
        } else {
            0.0
        }
    }

    pub fn scroll_down(&mut self, lines: usize, line_count: usize) {
        let max_offset = line_count.saturating_sub(self.height);
        self.offset = self.offset.saturating_add(lines).min(max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }
}

/// Stand-in for a visibility observer on the sentinel line. Reports are only
/// produced while attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentinelObserver {
    attached: bool,
}

impl SentinelObserver {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn measure(&self, viewport: &Viewport, row_count: usize) -> Option<f32> {
        self.attached.then(|| viewport.sentinel_ratio(row_count))
    }
}
