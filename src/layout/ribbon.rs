use crate::config::RibbonConfig;

/// Horizontal extent of a rendered element, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Everything needed to draw the ribbon under one nav item.
#[derive(Clone, Debug, PartialEq)]
pub struct RibbonGeometry {
    /// Offset from the nav list's left edge.
    pub left: f64,
    pub width: f64,
    pub svg_height: f64,
    pub view_box: String,
    pub path: String,
}

impl RibbonGeometry {
    pub fn measure(list: Span, item: Span, config: &RibbonConfig) -> Self {
        let width = (item.width + config.padding).max(config.min_width);
        let center = item.left - list.left + item.width / 2.0;

        Self {
            left: center - width / 2.0,
            width,
            svg_height: config.svg_height,
            view_box: format!(
                "0 0 {} {}",
                width + config.view_box_padding * 2.0,
                config.reference_height
            ),
            path: outline(width, config),
        }
    }
}

// The artwork is "M4 4C4 1.79086 5.79086 0 8 0H90C92.2091 0 94 1.79086 94 4V101.5L49 81.2L4 101.5V4Z"
// at 98x110. Only x coordinates stretch; the corner radii and the tail notch stay fixed.
fn outline(width: f64, config: &RibbonConfig) -> String {
    let scale = width / config.reference_width;
    let left = 4.0 + config.view_box_padding;
    let right = left + 90.0 * scale;
    let center = left + 45.0 * scale;
    let control = left + 86.0 * scale;

    format!(
        "M{left} 4C{left} 1.79086 {} 0 {} 0H{right}C{control} 0 {} 1.79086 {} 4V101.5L{center} 81.2L{left} 101.5V4Z",
        left + 1.79086,
        left + 4.0,
        right + 4.0,
        right + 4.0,
    )
}

/// Element id targeted by a nav link, if the link points at an in-page section.
pub fn section_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Window scroll position that puts a section just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn narrow_items_get_minimum_width() {
        let config = RibbonConfig::default();
        let geometry = RibbonGeometry::measure(Span::new(100.0, 600.0), Span::new(120.0, 20.0), &config);

        assert_eq!(geometry.width, 78.0);
        // centre of the item is at 30 relative to the list
        assert_eq!(geometry.left, 30.0 - 39.0);
    }

    #[test]
    fn wide_items_get_padding() {
        let config = RibbonConfig::default();
        let geometry = RibbonGeometry::measure(Span::new(0.0, 600.0), Span::new(200.0, 100.0), &config);

        assert_eq!(geometry.width, 150.0);
        assert_eq!(geometry.left, 175.0);
        assert_eq!(geometry.view_box, "0 0 158 110");
        assert_eq!(geometry.svg_height, 85.0);
    }

    #[test]
    fn reference_width_reproduces_artwork_shifted_by_padding() {
        let config = RibbonConfig::default();
        let geometry = RibbonGeometry::measure(Span::new(0.0, 300.0), Span::new(0.0, 48.0), &config);

        assert_eq!(geometry.width, 98.0);
        assert_eq!(
            geometry.path,
            format!(
                "M8 4C8 1.79086 {} 0 12 0H98C94 0 102 1.79086 102 4V101.5L53 81.2L8 101.5V4Z",
                8.0 + 1.79086
            )
        );
    }

    #[test]
    fn section_id_requires_a_fragment() {
        assert_eq!(section_id("#faq"), Some("faq"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id(""), None);
        assert_eq!(section_id("/pricing"), None);
    }

    #[test]
    fn scroll_target_clears_header() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
    }

    proptest! {
        #[test]
        fn width_respects_minimum_and_padding(
            list_left in -500.0f64..500.0,
            item_offset in 0.0f64..2000.0,
            item_width in 0.0f64..800.0,
        ) {
            let config = RibbonConfig::default();
            let list = Span::new(list_left, 3000.0);
            let item = Span::new(list_left + item_offset, item_width);
            let geometry = RibbonGeometry::measure(list, item, &config);

            prop_assert!(geometry.width >= 78.0);
            prop_assert!(geometry.width >= item_width + 50.0);
            // centred under the item
            let ribbon_center = geometry.left + geometry.width / 2.0;
            prop_assert!((ribbon_center - (item_offset + item_width / 2.0)).abs() < 1e-9);
        }

        #[test]
        fn measure_is_deterministic(item_left in 0.0f64..1000.0, item_width in 0.0f64..400.0) {
            let config = RibbonConfig::default();
            let list = Span::new(0.0, 1200.0);
            let item = Span::new(item_left, item_width);

            prop_assert_eq!(
                RibbonGeometry::measure(list, item, &config),
                RibbonGeometry::measure(list, item, &config)
            );
        }
    }
}
