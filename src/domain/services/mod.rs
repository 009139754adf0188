//! Domain Services
//!
//! Stateless functions over domain entities. None of these touch the
//! file system.

pub mod asset_naming;
pub mod html_generator;
pub mod html_references;

pub use html_generator::generate as generate_html;
pub use html_references::{extract_references, AssetReference, ReferenceKind};
