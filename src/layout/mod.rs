//! Positioning content on the page.
//!
//! [`wrap_text`](crate::layout::wrap_text) and [`wrap_items`](crate::layout::wrap_items) break
//! text into lines by measured width, the [`LayoutCursor`](crate::layout::LayoutCursor) tracks
//! the vertical write position, and [`layout_resume`](crate::layout::layout_resume) draws a
//! whole resume with them.
//!
//! # Example
//!
//! ```
//! use resume_pdf::{Document, FontSet, Page, Pt, ResumeData, StyleName, StyleProfile};
//! use resume_pdf::layout::{layout_resume, Margins};
//! use resume_pdf::pagesize;
//!
//! let mut doc = Document::default();
//! let fonts = FontSet::builtin(&mut doc);
//! let profile = StyleProfile::resolve(StyleName::Ats);
//!
//! let resume = ResumeData {
//!     name: Some("Jane Doe".into()),
//!     skills: vec!["Go".into(), "SQL".into()],
//!     ..Default::default()
//! };
//!
//! let mut page = Page::new(pagesize::LETTER, Some(Margins::all(Pt(54.0))));
//! let summary = layout_resume(&doc, &fonts, &profile, &resume, &mut page);
//! assert_eq!(summary.dividers, 1);
//! doc.add_page(page);
//! ```

mod cursor;
mod engine;
mod margins;
mod text;

pub use cursor::*;
pub use engine::*;
pub use margins::*;
pub use text::*;
