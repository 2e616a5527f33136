//! Page dimensions. Resumes are laid out on a single US Letter page.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// US Letter, 8.5 x 11 inches (612 x 792 points)
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
