//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `page`: Whole-screen layout
//! - `components`: Header, error line and footer
//! - `panels`: The three result blocks
//! - `json`: Browser-compatible JSON pretty printing
//! - `styling`: Color schemes and style constants

mod components;
mod json;
mod page;
mod panels;
mod styling;

pub use page::render_page;
pub use panels::format_slot;
