//! Conversion of laid out page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, RuleLayout, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to an uncompressed PDF content stream
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Rule(rule) => render_rule(&mut content, rule)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<{}> Tj\n", fonts[current_font.id].encode(&span.text))?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rule(content: &mut Vec<u8>, rule: &RuleLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", rule.thickness)?;
    write_stroke_colour(content, rule.colour)?;
    write!(content, "{} {} m\n", rule.from.0, rule.from.1)?;
    write!(content, "{} {} l\n", rule.to.0, rule.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{colour::colours, document::Document, font::FontSet, units::Pt};

    #[test]
    fn text_is_drawn_with_font_colour_and_position() {
        let mut doc = Document::default();
        let fonts = FontSet::builtin(&mut doc);
        let contents = vec![PageContents::Text(vec![SpanLayout {
            text: "Hi".into(),
            font: SpanFont {
                id: fonts.bold,
                size: Pt(11.0),
            },
            colour: Colour::Grey { g: 0.5 },
            coords: (Pt(54.0), Pt(700.0)),
        }])];

        let rendered = render_contents(&contents, &doc.fonts).expect("render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");
        assert_eq!(
            rendered,
            "q\n/F1 11 Tf\n0.5 g\nBT\n54 700 Td\n<4869> Tj\nET\nQ\n"
        );
    }

    #[test]
    fn rules_are_stroked() {
        let contents = vec![PageContents::Rule(RuleLayout {
            from: (Pt(54.0), Pt(600.0)),
            to: (Pt(558.0), Pt(600.0)),
            thickness: Pt(0.5),
            colour: colours::BLACK,
        })];
        let rendered = render_contents(&contents, &Arena::new()).expect("render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");
        assert_eq!(rendered, "q\n0.5 w\n0 G\n54 600 m\n558 600 l\nS\nQ\n");
    }
}
