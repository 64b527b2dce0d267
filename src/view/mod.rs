//! Owned element trees standing in for the page's DOM.
//!
//! Render functions build a fresh [`Element`] tree from immutable input; nothing
//! here holds state between renders.

pub mod element;
pub mod html;

pub use element::{create_element, set_inner_text, Element};
