use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::NodeRef;

use crate::layout::carousel::ScrollMetrics;
use crate::layout::ribbon::{self, Span};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{0} is not mounted")]
    NotMounted(&'static str),
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not an html element")]
    NotHtml(String),
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn element(node: &NodeRef, what: &'static str) -> Result<HtmlElement, DomError> {
    node.cast::<HtmlElement>().ok_or(DomError::NotMounted(what))
}

/// Horizontal extent of a mounted element in viewport coordinates.
pub fn span(node: &NodeRef, what: &'static str) -> Result<Span, DomError> {
    let rect = node
        .cast::<Element>()
        .ok_or(DomError::NotMounted(what))?
        .get_bounding_client_rect();
    Ok(Span::new(rect.left(), rect.width()))
}

pub fn scroll_metrics(container: &HtmlElement) -> ScrollMetrics {
    ScrollMetrics {
        offset: f64::from(container.scroll_left()),
        scroll_width: f64::from(container.scroll_width()),
        viewport_width: f64::from(container.offset_width()),
    }
}

fn smooth_options() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

pub fn smooth_scroll_by(container: &HtmlElement, left: f64) {
    let options = smooth_options();
    options.set_left(left);
    container.scroll_by_with_scroll_to_options(&options);
}

pub fn smooth_scroll_to(container: &HtmlElement, left: f64) {
    let options = smooth_options();
    options.set_left(left);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls the page so the section with `id` starts right below the header.
/// A missing header counts as zero height.
pub fn scroll_to_section(id: &str, header: &NodeRef) -> Result<(), DomError> {
    let window = window()?;
    let section = window
        .document()
        .ok_or(DomError::NoDocument)?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtml(id.to_string()))?;

    let header_height = element(header, "header")
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let options = smooth_options();
    options.set_top(ribbon::scroll_target(f64::from(section.offset_top()), header_height));
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
