use crate::units::Pt;

/// Margins are applied to [`Page`](crate::Page)s to determine the content box, the band
/// that layout keeps text and rules inside of
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::units::In;

    #[test]
    fn uniform_margins_accept_inches() {
        let margins = Margins::all(In(0.75));
        assert_eq!(margins, Margins::trbl(Pt(54.0), Pt(54.0), Pt(54.0), Pt(54.0)));
    }
}
