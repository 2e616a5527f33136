//! Lays a [ResumeData] out on a single page.
//!
//! Sections are drawn top to bottom in a fixed order. Each section is first measured into
//! rows (wrapped lines whose horizontal positions are final) and then placed one row at a
//! time below the [LayoutCursor]. Nothing is ever drawn below the bottom margin: the first
//! row that would cross it ends the layout, and the page is truncated there.

use super::cursor::LayoutCursor;
use super::text::{wrap_items, wrap_text, FontMetrics, MeasureText};
use crate::colour::colours;
use crate::document::Document;
use crate::font::{Font, FontSet, Weight};
use crate::model::ResumeData;
use crate::page::{Page, RuleLayout, SpanFont, SpanLayout};
use crate::style::{DatePlacement, StyleProfile, TextRole};
use crate::units::Pt;
use tracing::debug;

/// Size of the optional `Generated` footer
const FOOTER_SIZE: Pt = Pt(8.0);

/// Right-aligned dates may take at most this share of the band before they move to a
/// line of their own
const DATE_COLUMN_SHARE: f32 = 0.5;

/// The parts of a resume, in the order they are drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Section::Header,
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Certifications,
    ];

    /// The heading drawn above the section, before upper-casing. The header has none.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::Header => None,
            Section::Summary => Some("Summary"),
            Section::Skills => Some("Skills"),
            Section::Experience => Some("Experience"),
            Section::Projects => Some("Projects"),
            Section::Education => Some("Education"),
            Section::Certifications => Some("Certifications"),
        }
    }
}

/// What a layout pass ended up drawing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Sections that were started, in drawing order
    pub sections: Vec<Section>,
    pub dividers: usize,
    /// Whether some content did not fit on the page
    pub truncated: bool,
}

/// A run of text with its final x position
struct Piece {
    text: String,
    role: TextRole,
    x: Pt,
}

/// One measured line of a section. `role` decides the line's leading.
enum Row {
    Line { role: TextRole, pieces: Vec<Piece> },
    Gap(Pt),
}

struct Engine<'a> {
    document: &'a Document,
    fonts: &'a FontSet,
    profile: &'a StyleProfile,
    cursor: LayoutCursor,
    summary: LayoutSummary,
}

/// Lay the resume out on `page` with the given profile, returning what was drawn.
///
/// Sections with nothing to show are skipped entirely, heading included. A divider is drawn
/// before every section except the first one drawn, so the number of dividers is always
/// one less than the number of sections.
pub fn layout_resume(
    document: &Document,
    fonts: &FontSet,
    profile: &StyleProfile,
    resume: &ResumeData,
    page: &mut Page,
) -> LayoutSummary {
    let mut engine = Engine {
        document,
        fonts,
        profile,
        cursor: LayoutCursor::new(page.content_box),
        summary: LayoutSummary::default(),
    };

    for section in Section::ORDER {
        if engine.cursor.is_exhausted() {
            break;
        }
        let rows = engine.section_rows(section, resume);
        if !rows.iter().any(|row| matches!(row, Row::Line { .. })) {
            debug!(?section, "nothing to draw, skipping section");
            continue;
        }
        engine.place_section(section, rows, page);
    }

    engine.summary
}

/// Draw `text` small and grey, right-aligned in the bottom margin
pub fn layout_footer(document: &Document, fonts: &FontSet, page: &mut Page, text: &str) {
    let font_id = fonts.get(Weight::Regular);
    let width = document.fonts[font_id].width_of_text(text, FOOTER_SIZE);
    let x = page.content_box.x2 - width;
    let y = page.content_box.y1 * 0.6;
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: SpanFont {
            id: font_id,
            size: FOOTER_SIZE,
        },
        colour: colours::FOOTER,
        coords: (x, y),
    });
}

impl Engine<'_> {
    fn font(&self, role: TextRole) -> &Font {
        let id = self.fonts.get(self.profile.role(role).weight);
        &self.document.fonts[id]
    }

    fn metrics(&self, role: TextRole) -> FontMetrics<'_> {
        FontMetrics {
            font: self.font(role),
            size: self.profile.role(role).size,
        }
    }

    fn measure(&self, role: TextRole, text: &str) -> Pt {
        self.metrics(role).measure(text)
    }

    /// (ascent, descent) of the tallest glyph box on the row; descent is negative
    fn extent(&self, pieces: &[Piece]) -> (Pt, Pt) {
        pieces.iter().fold((Pt(0.0), Pt(0.0)), |(ascent, descent), piece| {
            let size = self.profile.role(piece.role).size;
            let font = self.font(piece.role);
            (ascent.max(font.ascent(size)), descent.min(font.descent(size)))
        })
    }

    /// Height needed before the first content row of a section can be drawn: the divider,
    /// the heading, and the glyph box of the first line under it
    fn opening_height(&self, rows: &[Row], with_divider: bool, has_heading: bool) -> Pt {
        let mut height = if with_divider {
            self.profile.divider.slot
        } else {
            Pt(0.0)
        };
        let mut lines_left = if has_heading { 2 } else { 1 };
        for row in rows {
            match row {
                Row::Gap(gap) => height += *gap,
                Row::Line { role, pieces } => {
                    lines_left -= 1;
                    if lines_left == 0 {
                        let (ascent, descent) = self.extent(pieces);
                        return height + ascent - descent;
                    }
                    height += self.profile.role(*role).leading;
                }
            }
        }
        height
    }

    fn place_section(&mut self, section: Section, rows: Vec<Row>, page: &mut Page) {
        let with_divider = !self.summary.sections.is_empty();
        let needed = self.opening_height(&rows, with_divider, section.heading().is_some());
        if !self.cursor.fits(needed) {
            debug!(?section, remaining = %self.cursor.remaining(), "no room to start section");
            self.truncate();
            return;
        }

        if with_divider {
            self.place_divider(page);
        }
        self.summary.sections.push(section);
        debug!(?section, "drawing section");

        for row in rows {
            match row {
                Row::Gap(gap) => self.cursor.advance(gap),
                Row::Line { role, pieces } => {
                    if !self.place_line(role, pieces, page) {
                        debug!(?section, "ran out of page mid-section");
                        self.truncate();
                        return;
                    }
                }
            }
        }
        self.cursor.advance(self.profile.section_gap);
    }

    fn truncate(&mut self) {
        self.cursor.exhaust();
        self.summary.truncated = true;
    }

    fn place_divider(&mut self, page: &mut Page) {
        let divider = self.profile.divider;
        let y = self.cursor.y() - divider.slot / 2.0;
        page.add_rule(RuleLayout {
            from: (self.cursor.left(), y),
            to: (self.cursor.right(), y),
            thickness: divider.thickness,
            colour: divider.colour,
        });
        self.cursor.advance(divider.slot);
        self.summary.dividers += 1;
    }

    /// Draw one row below the cursor, or report that its glyph box would cross the bottom
    /// margin
    fn place_line(&mut self, role: TextRole, pieces: Vec<Piece>, page: &mut Page) -> bool {
        let (ascent, descent) = self.extent(&pieces);
        if !self.cursor.fits(ascent - descent) {
            return false;
        }

        let baseline = self.cursor.y() - ascent;
        let spans = pieces
            .into_iter()
            .map(|piece| {
                let style = self.profile.role(piece.role);
                SpanLayout {
                    text: piece.text,
                    font: SpanFont {
                        id: self.fonts.get(style.weight),
                        size: style.size,
                    },
                    colour: style.colour,
                    coords: (piece.x, baseline),
                }
            })
            .collect();
        page.add_line(spans);
        self.cursor.advance(self.profile.role(role).leading);
        true
    }

    fn section_rows(&self, section: Section, resume: &ResumeData) -> Vec<Row> {
        let body = match section {
            Section::Header => return self.header_rows(resume),
            Section::Summary => match &resume.summary {
                Some(summary) => self.text_rows(TextRole::Body, summary, Pt(0.0)),
                None => Vec::new(),
            },
            Section::Skills => {
                let width = self.cursor.width();
                let separator = self.profile.skills_separator;
                wrap_items(&resume.skills, separator, width, &self.metrics(TextRole::Body))
                    .into_iter()
                    .map(|line| self.line(TextRole::Body, line, Pt(0.0)))
                    .collect()
            }
            Section::Experience => self.entries(resume.experience.iter().filter_map(|job| {
                (!job.is_blank()).then(|| {
                    let mut rows = self.entry_heading(
                        TextRole::EntryTitle,
                        &[&job.company, &job.role],
                        &job.dates,
                    );
                    rows.extend(self.bullet_rows(&job.bullets));
                    rows
                })
            })),
            Section::Projects => self.entries(resume.projects.iter().filter_map(|project| {
                (!project.is_blank()).then(|| {
                    let mut rows =
                        self.entry_heading(TextRole::EntryTitle, &[&project.name], &project.meta);
                    rows.extend(self.bullet_rows(&project.bullets));
                    rows
                })
            })),
            Section::Education => resume
                .education
                .iter()
                .filter(|school| !school.is_blank())
                .flat_map(|school| {
                    self.entry_heading(
                        TextRole::Body,
                        &[&school.degree, &school.school],
                        &school.dates,
                    )
                })
                .collect(),
            Section::Certifications => self.bullet_rows(&resume.certifications),
        };

        match section.heading() {
            Some(heading) if !body.is_empty() => {
                let mut rows = vec![self.line(TextRole::Heading, heading.to_uppercase(), Pt(0.0))];
                rows.extend(body);
                rows
            }
            _ => body,
        }
    }

    fn header_rows(&self, resume: &ResumeData) -> Vec<Row> {
        let width = self.cursor.width();
        let mut rows: Vec<Row> = Vec::new();

        if let Some(name) = &resume.name {
            rows.extend(self.text_rows(TextRole::Name, name, Pt(0.0)));
        }

        let title_items: Vec<&str> = [&resume.title, &resume.location]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let separator = self.profile.contact_separator;
        let title_metrics = self.metrics(TextRole::Title);
        for line in wrap_items(&title_items, separator, width, &title_metrics) {
            rows.push(self.line(TextRole::Title, line, Pt(0.0)));
        }

        let contact_items: Vec<String> = [
            ("Phone", &resume.phone),
            ("Email", &resume.email),
            ("Website", &resume.website),
            ("LinkedIn", &resume.linkedin),
            ("GitHub", &resume.github),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|value| format!("{label}: {value}")))
        .collect();
        let contact_metrics = self.metrics(TextRole::Contact);
        for line in wrap_items(&contact_items, separator, width, &contact_metrics) {
            rows.push(self.line(TextRole::Contact, line, Pt(0.0)));
        }

        rows
    }

    fn line(&self, role: TextRole, text: String, indent: Pt) -> Row {
        Row::Line {
            role,
            pieces: vec![Piece {
                text,
                role,
                x: self.cursor.left() + indent,
            }],
        }
    }

    /// A paragraph wrapped to the band, less `indent`
    fn text_rows(&self, role: TextRole, text: &str, indent: Pt) -> Vec<Row> {
        wrap_text(text, self.cursor.width() - indent, &self.metrics(role))
            .into_iter()
            .map(|line| self.line(role, line, indent))
            .collect()
    }

    /// Entries of a list section, separated by a small gap
    fn entries<I: Iterator<Item = Vec<Row>>>(&self, entries: I) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        for entry in entries {
            if !rows.is_empty() {
                rows.push(Row::Gap(self.profile.entry_gap));
            }
            rows.extend(entry);
        }
        rows
    }

    /// The heading line of an entry: the non-empty `parts` joined, with `dates` placed per
    /// the profile
    fn entry_heading(&self, role: TextRole, parts: &[&String], dates: &str) -> Vec<Row> {
        let title = parts
            .iter()
            .map(|part| part.as_str())
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(self.profile.entry_joiner);

        if dates.is_empty() {
            return self.text_rows(role, &title, Pt(0.0));
        }

        match self.profile.dates {
            DatePlacement::Inline => {
                let text = if title.is_empty() {
                    format!("({dates})")
                } else {
                    format!("{title} ({dates})")
                };
                self.text_rows(role, &text, Pt(0.0))
            }
            DatePlacement::RightAligned => {
                let date_width = self.measure(TextRole::Date, dates);
                let title_width = self.cursor.width() - date_width - self.profile.date_gutter;

                // dates that would crowd the title off its line drop below it instead
                if title_width < self.cursor.width() * DATE_COLUMN_SHARE {
                    let mut rows = self.text_rows(role, &title, Pt(0.0));
                    rows.extend(self.text_rows(TextRole::Date, dates, Pt(0.0)));
                    return rows;
                }

                let date = Piece {
                    text: dates.to_string(),
                    role: TextRole::Date,
                    x: (self.cursor.right() - date_width).max(self.cursor.left()),
                };

                let mut lines = wrap_text(&title, title_width, &self.metrics(role)).into_iter();
                let mut first: Vec<Piece> = Vec::with_capacity(2);
                if let Some(line) = lines.next() {
                    first.push(Piece {
                        text: line,
                        role,
                        x: self.cursor.left(),
                    });
                }
                first.push(date);

                let mut rows = vec![Row::Line {
                    role,
                    pieces: first,
                }];
                rows.extend(lines.map(|line| self.line(role, line, Pt(0.0))));
                rows
            }
        }
    }

    /// A bulleted list: the glyph sits on the first line of each item and continuation lines
    /// hang under the item's text
    fn bullet_rows(&self, items: &[String]) -> Vec<Row> {
        let indent = self.profile.bullet_text_indent;
        let width = self.cursor.width() - indent;
        let metrics = self.metrics(TextRole::Body);

        let mut rows: Vec<Row> = Vec::new();
        for item in items {
            let mut lines = wrap_text(item, width, &metrics).into_iter();
            let Some(first) = lines.next() else {
                continue;
            };
            rows.push(Row::Line {
                role: TextRole::Body,
                pieces: vec![
                    Piece {
                        text: self.profile.bullet.to_string(),
                        role: TextRole::Body,
                        x: self.cursor.left() + self.profile.bullet_indent,
                    },
                    Piece {
                        text: first,
                        role: TextRole::Body,
                        x: self.cursor.left() + indent,
                    },
                ],
            });
            rows.extend(lines.map(|line| self.line(TextRole::Body, line, indent)));
        }
        rows
    }
}
