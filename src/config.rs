use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Warn
}

/// Reference geometry of the ribbon artwork and how it is stretched under a nav item.
#[derive(Clone, Debug, PartialEq)]
pub struct RibbonConfig {
    /// Extra width around the link text, split evenly on both sides.
    pub padding: f64,
    pub min_width: f64,
    pub reference_width: f64,
    pub reference_height: f64,
    /// Rendered svg height attribute.
    pub svg_height: f64,
    /// Added on each side of the viewBox so the outline never clips.
    pub view_box_padding: f64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            padding: 50.0,
            min_width: 78.0,
            reference_width: 98.0,
            reference_height: 110.0,
            svg_height: 85.0,
            view_box_padding: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub head: String,
    pub rest: String,
    pub exploration: String,
    pub start_delay_ms: u32,
    pub char_delay_ms: u32,
    pub head_to_rest_ms: u32,
    pub rest_to_exploration_ms: u32,
    pub dwell_ms: u32,
    pub restart_pause_ms: u32,
    pub dark_color: &'static str,
    pub light_color: &'static str,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            head: "Foundation ".to_string(),
            rest: "built on".to_string(),
            exploration: "Exploration, Play and Care".to_string(),
            start_delay_ms: 500,
            char_delay_ms: 80,
            head_to_rest_ms: 200,
            rest_to_exploration_ms: 300,
            dwell_ms: 2000,
            restart_pause_ms: 1000,
            dark_color: "#0f0339",
            light_color: "#ffffff",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Pixels moved per scroll button click.
    pub scroll_step: f64,
    /// Tolerance when deciding the container sits at its right edge.
    pub end_tolerance: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: 300.0,
            end_tolerance: 1.0,
        }
    }
}
