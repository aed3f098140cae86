//! Infinite-Scroll Trigger
//!
//! Edge detector for sentinel visibility. Fires once per
//! invisible -> visible transition while more data exists, and never
//! while detached.

/// Default early-trigger margin around the viewport
pub const DEFAULT_ROOT_MARGIN: &str = "200px";

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTrigger {
    attached: bool,
    visible: bool,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh observation; the sentinel counts as not visible
    /// until the first report.
    pub fn attach(&mut self) {
        self.attached = true;
        self.visible = false;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.visible = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record a visibility report. Returns true when load-more should run.
    pub fn on_visibility(&mut self, visible: bool, has_more: bool) -> bool {
        if !self.attached {
            return false;
        }
        let became_visible = visible && !self.visible;
        self.visible = visible;
        became_visible && has_more
    }
}
