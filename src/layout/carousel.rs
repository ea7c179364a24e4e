use crate::config::CarouselConfig;

/// Number of progress dots under the journey strip, independent of how many panels it holds.
pub const DOT_COUNT: usize = 3;

/// Scroll measurements of the journey container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_width: f64,
    pub viewport_width: f64,
}

impl ScrollMetrics {
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.viewport_width).max(0.0)
    }

    /// Position within the scrollable range, 0 at the start and 1 at the end.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max > 0.0 {
            (self.offset / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
}

impl ButtonState {
    pub fn opacity(&self) -> &'static str {
        if self.enabled { "1" } else { "0.5" }
    }

    pub fn pointer_events(&self) -> &'static str {
        if self.enabled { "auto" } else { "none" }
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; pointer-events: {};", self.opacity(), self.pointer_events())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub left: ButtonState,
    pub right: ButtonState,
    pub active_dot: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            left: ButtonState { enabled: false },
            right: ButtonState { enabled: true },
            active_dot: 0,
        }
    }
}

impl CarouselState {
    pub fn from_metrics(metrics: &ScrollMetrics, config: &CarouselConfig) -> Self {
        Self {
            left: ButtonState { enabled: metrics.offset > 0.0 },
            right: ButtonState {
                enabled: metrics.offset < metrics.max_offset() - config.end_tolerance,
            },
            active_dot: dot_for_progress(metrics.progress()),
        }
    }
}

pub fn dot_for_progress(progress: f64) -> usize {
    if progress < 0.33 {
        0
    } else if progress < 0.67 {
        1
    } else {
        2
    }
}

/// Scroll offset a dot jumps to: start, middle, end.
pub fn dot_offset(dot: usize, max_offset: f64) -> f64 {
    (max_offset / 2.0) * dot as f64
}
