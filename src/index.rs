//! Documentation index
//!
//! Types for the pre-generated index file and the loader that reads it.
//! The index is produced by an external docs-generation step and is
//! read-only to this program.

pub mod loader;
mod types;

pub use loader::load_index;
pub use types::{DocIndex, Document, ModuleData, NavChild, NavGroup, PageData, ParallelIndex, Section};
