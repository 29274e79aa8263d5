//! Navigation pane
//!
//! The collapsible navigation tree: the current document's table of
//! contents first, then the generator-supplied navigation groups. The
//! scroll-spy keeps the TOC entry for the section at the top of the
//! content viewport highlighted and in view.

pub mod nav_events;
pub mod nav_render;
mod nav_state;

pub use nav_state::{NavCommand, NavRow, NavState};
