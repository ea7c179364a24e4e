//! Pure state and geometry behind the landing page widgets. Nothing in here touches the DOM.

pub mod accordion;
pub mod carousel;
pub mod nav;
pub mod ribbon;
