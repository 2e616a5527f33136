use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

/// A font face at a particular size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text in a single font and colour, drawn with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A straight stroked line
#[derive(Clone, PartialEq, Debug)]
pub struct RuleLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

/// The drawing commands of a page, in paint order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// Spans sharing a line
    Text(Vec<SpanLayout>),
    Rule(RuleLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text and rules
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add several spans that sit on the same line; empty spans are dropped
    pub fn add_line(&mut self, spans: Vec<SpanLayout>) {
        let spans: Vec<SpanLayout> = spans.into_iter().filter(|s| !s.text.is_empty()).collect();
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    pub fn add_rule(&mut self, rule: RuleLayout) {
        self.contents.push(PageContents::Rule(rule));
    }

    /// Every text span on the page, in paint order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(spans.iter()),
                PageContents::Rule(_) => None,
            })
            .flatten()
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleLayout> {
        self.contents.iter().filter_map(|content| match content {
            PageContents::Rule(rule) => Some(rule),
            PageContents::Text(_) => None,
        })
    }

    /// The visible text, one string per drawn line with spans on a line joined by a space
    pub fn text_lines(&self) -> Vec<String> {
        self.contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(
                    spans
                        .iter()
                        .map(|span| span.text.as_str())
                        .collect::<Vec<&str>>()
                        .join(" "),
                ),
                PageContents::Rule(_) => None,
            })
            .collect()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        page_id: Ref,
        parent: Ref,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let rendered = render_contents(&self.contents, fonts)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(page_id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(id.index())) {
                resource_fonts.pair(Name(format!("F{}", id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{colour::colours, document::Document, font::FontSet, pagesize};

    #[test]
    fn content_box_sits_inside_the_margins() {
        let page = Page::new(pagesize::LETTER, Some(Margins::all(Pt(54.0))));
        assert_eq!(page.content_box.x1, Pt(54.0));
        assert_eq!(page.content_box.y1, Pt(54.0));
        assert_eq!(page.content_box.x2, Pt(558.0));
        assert_eq!(page.content_box.y2, Pt(738.0));
        assert_eq!(page.media_box.width(), Pt(612.0));
    }

    #[test]
    fn lines_and_rules_keep_paint_order() {
        let mut doc = Document::default();
        let fonts = FontSet::builtin(&mut doc);
        let font = SpanFont {
            id: fonts.regular,
            size: Pt(10.0),
        };
        let span = |text: &str, x: f32| SpanLayout {
            text: text.to_string(),
            font,
            colour: colours::TEXT,
            coords: (Pt(x), Pt(700.0)),
        };

        let mut page = Page::new(pagesize::LETTER, None);
        page.add_line(vec![span("Acme", 54.0), span("", 90.0), span("2020", 500.0)]);
        page.add_rule(RuleLayout {
            from: (Pt(54.0), Pt(690.0)),
            to: (Pt(558.0), Pt(690.0)),
            thickness: Pt(0.5),
            colour: colours::RULE,
        });
        page.add_line(Vec::new());

        assert_eq!(page.contents.len(), 2);
        assert_eq!(page.text_lines(), vec!["Acme 2020".to_string()]);
        assert_eq!(page.spans().count(), 2);
        assert_eq!(page.rules().count(), 1);
    }
}
