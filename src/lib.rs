//! Turns a structured resume into a single, print-ready PDF page.
//!
//! Resume data is normalised by the [model] builder, laid out top to bottom by
//! [layout::layout_resume] in one of two [StyleProfile]s, and serialised through a small
//! PDF surface ([Document], [Page], [Font]) built on `pdf-writer`.

mod colour;
pub use colour::*;

mod config;
pub use config::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout text on pages
pub mod layout;

/// The canonical resume record and how it is built from JSON
pub mod model;
pub use model::{BuildMode, ResumeData};

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
