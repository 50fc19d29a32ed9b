//! HTML rendering.
//!
//! Pages are plain string templates: `layout::document` wraps a title and
//! body, `fragments` holds the reusable pieces (Referer display, policy meta
//! tag, policy selector, delayed navigation).

pub mod fragments;
pub mod layout;

pub use layout::document;
