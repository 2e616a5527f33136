use crate::rect::Rect;
use crate::units::Pt;

/// The vertical write position of a single page layout.
///
/// The cursor sits at the top edge of the next line box and only ever moves down the page.
/// Once something fails to fit it is exhausted, and every later [fits](LayoutCursor::fits)
/// check fails so nothing else is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    band: Rect,
    y: Pt,
    exhausted: bool,
}

impl LayoutCursor {
    /// Start at the top of the content band
    pub fn new(band: Rect) -> LayoutCursor {
        LayoutCursor {
            band,
            y: band.y2,
            exhausted: false,
        }
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    pub fn left(&self) -> Pt {
        self.band.x1
    }

    pub fn right(&self) -> Pt {
        self.band.x2
    }

    pub fn width(&self) -> Pt {
        self.band.width()
    }

    /// The lowest y anything may be drawn at
    pub fn bottom(&self) -> Pt {
        self.band.y1
    }

    /// Vertical space left above the bottom of the band
    pub fn remaining(&self) -> Pt {
        if self.exhausted {
            Pt(0.0)
        } else {
            (self.y - self.band.y1).max(Pt(0.0))
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether a box `height` tall still fits below the cursor
    pub fn fits(&self, height: Pt) -> bool {
        !self.exhausted && self.y - height >= self.band.y1
    }

    /// Move down by `by`. Negative distances are ignored and the cursor never passes the
    /// bottom of the band.
    pub fn advance(&mut self, by: Pt) {
        let by = by.max(Pt(0.0));
        self.y = (self.y - by).max(self.band.y1).min(self.y);
    }

    /// Stop all further layout on this page
    pub fn exhaust(&mut self) {
        self.exhausted = true;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn band() -> Rect {
        Rect {
            x1: Pt(54.0),
            y1: Pt(54.0),
            x2: Pt(558.0),
            y2: Pt(738.0),
        }
    }

    #[test]
    fn starts_at_the_top_of_the_band() {
        let cursor = LayoutCursor::new(band());
        assert_eq!(cursor.y(), Pt(738.0));
        assert_eq!(cursor.remaining(), Pt(684.0));
        assert_eq!(cursor.width(), Pt(504.0));
        assert_eq!((cursor.left(), cursor.right()), (Pt(54.0), Pt(558.0)));
    }

    #[test]
    fn never_passes_the_bottom_margin() {
        let mut cursor = LayoutCursor::new(band());
        assert!(cursor.fits(Pt(684.0)));
        assert!(!cursor.fits(Pt(684.5)));
        cursor.advance(Pt(1000.0));
        assert_eq!(cursor.y(), cursor.bottom());
        assert_eq!(cursor.remaining(), Pt(0.0));
    }

    #[test]
    fn exhausted_cursor_fits_nothing() {
        let mut cursor = LayoutCursor::new(band());
        cursor.exhaust();
        assert!(cursor.is_exhausted());
        assert!(!cursor.fits(Pt(0.0)));
        assert_eq!(cursor.remaining(), Pt(0.0));
    }

    proptest! {
        #[test]
        fn only_moves_down(steps in prop::collection::vec(-50.0f32..120.0, 0..64)) {
            let mut cursor = LayoutCursor::new(band());
            let mut last = cursor.y();
            for step in steps {
                cursor.advance(Pt(step));
                prop_assert!(cursor.y() <= last);
                prop_assert!(cursor.y() >= cursor.bottom());
                last = cursor.y();
            }
        }
    }
}
