//! The two visual profiles a resume can be drawn with.
//!
//! Everything that differs between the plain `ats` layout and the `pretty` one lives in a
//! [StyleProfile] resolved once from a [StyleName]; the layout engine only reads the table.

use crate::colour::{colours, Colour};
use crate::font::Weight;
use crate::units::Pt;

/// Which profile to draw with
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum StyleName {
    /// Single column, plain, parser friendly
    #[default]
    Ats,
    /// Accent coloured headings, right-aligned dates, round bullets
    Pretty,
}

/// The kinds of text a resume is made of
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextRole {
    Name,
    Title,
    Contact,
    Heading,
    EntryTitle,
    Body,
    Date,
}

/// How one [TextRole] is drawn. `leading` is the distance from the top of one line box to
/// the top of the next.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub weight: Weight,
    pub size: Pt,
    pub colour: Colour,
    pub leading: Pt,
}

impl TextStyle {
    const fn new(weight: Weight, size: f32, colour: Colour, leading: f32) -> TextStyle {
        TextStyle {
            weight,
            size: Pt(size),
            colour,
            leading: Pt(leading),
        }
    }
}

/// Where the dates (or project meta) of an entry go
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatePlacement {
    /// `Heading (dates)` on the heading line
    Inline,
    /// Flush against the right edge of the band, on the first heading baseline
    RightAligned,
}

/// The horizontal line drawn between sections
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Divider {
    pub thickness: Pt,
    pub colour: Colour,
    /// Vertical space the divider takes; the line sits in the middle of it
    pub slot: Pt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub style: StyleName,
    pub name: TextStyle,
    pub title: TextStyle,
    pub contact: TextStyle,
    pub heading: TextStyle,
    pub entry_title: TextStyle,
    pub body: TextStyle,
    pub date: TextStyle,
    pub bullet: &'static str,
    pub dates: DatePlacement,
    pub skills_separator: &'static str,
    pub contact_separator: &'static str,
    pub entry_joiner: &'static str,
    pub divider: Divider,
    /// Space left after the last line of every section
    pub section_gap: Pt,
    /// Space between consecutive experience or project entries
    pub entry_gap: Pt,
    pub bullet_indent: Pt,
    pub bullet_text_indent: Pt,
    /// Minimum space between a wrapped heading and right-aligned dates
    pub date_gutter: Pt,
}

impl StyleProfile {
    pub fn resolve(style: StyleName) -> StyleProfile {
        match style {
            StyleName::Ats => StyleProfile::ats(),
            StyleName::Pretty => StyleProfile::pretty(),
        }
    }

    fn ats() -> StyleProfile {
        use Weight::*;
        StyleProfile {
            style: StyleName::Ats,
            name: TextStyle::new(Bold, 20.0, colours::INK, 24.0),
            title: TextStyle::new(Regular, 11.0, colours::SUBTITLE, 16.0),
            contact: TextStyle::new(Regular, 9.0, colours::CONTACT, 11.0),
            heading: TextStyle::new(Bold, 11.0, colours::TEXT, 16.0),
            entry_title: TextStyle::new(Bold, 11.0, colours::TEXT, 14.0),
            body: TextStyle::new(Regular, 10.0, colours::TEXT, 13.0),
            date: TextStyle::new(Regular, 10.0, colours::TEXT, 13.0),
            bullet: "-",
            dates: DatePlacement::Inline,
            skills_separator: ", ",
            contact_separator: " | ",
            entry_joiner: " - ",
            divider: Divider {
                thickness: Pt(0.5),
                colour: colours::RULE,
                slot: Pt(12.0),
            },
            section_gap: Pt(6.0),
            entry_gap: Pt(4.0),
            bullet_indent: Pt(10.0),
            bullet_text_indent: Pt(22.0),
            date_gutter: Pt(12.0),
        }
    }

    fn pretty() -> StyleProfile {
        use Weight::*;
        StyleProfile {
            style: StyleName::Pretty,
            name: TextStyle::new(Bold, 22.0, colours::INK, 27.0),
            title: TextStyle::new(Regular, 12.0, colours::SUBTITLE, 17.0),
            contact: TextStyle::new(Regular, 9.0, colours::CONTACT, 11.0),
            heading: TextStyle::new(Bold, 11.0, colours::ACCENT, 17.0),
            entry_title: TextStyle::new(Bold, 11.0, colours::TEXT, 14.5),
            body: TextStyle::new(Regular, 10.0, colours::TEXT, 13.5),
            date: TextStyle::new(Regular, 10.0, colours::MUTED, 13.5),
            bullet: "•",
            dates: DatePlacement::RightAligned,
            skills_separator: ", ",
            contact_separator: " | ",
            entry_joiner: " - ",
            divider: Divider {
                thickness: Pt(1.0),
                colour: colours::RULE,
                slot: Pt(14.0),
            },
            section_gap: Pt(6.0),
            entry_gap: Pt(4.0),
            bullet_indent: Pt(10.0),
            bullet_text_indent: Pt(22.0),
            date_gutter: Pt(12.0),
        }
    }

    pub fn role(&self, role: TextRole) -> &TextStyle {
        match role {
            TextRole::Name => &self.name,
            TextRole::Title => &self.title,
            TextRole::Contact => &self.contact,
            TextRole::Heading => &self.heading,
            TextRole::EntryTitle => &self.entry_title,
            TextRole::Body => &self.body,
            TextRole::Date => &self.date,
        }
    }
}
