//! Terminal presentation: capability detection, design tokens, reusable
//! blocks and per-command views.

pub mod blocks;
pub mod ci;
pub mod console_sink;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
