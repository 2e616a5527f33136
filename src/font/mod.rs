//! Fonts, their metrics, and how they are written into the PDF.
//!
//! A [Font] is either a TrueType / OpenType face embedded in its entirety (as a Type0 font
//! with Identity-H encoding), or one of the built-in Helvetica faces which readers supply
//! themselves. Layout code only ever asks a font for metrics and never cares which kind it
//! holds.

mod builtin;
mod resolve;

pub use builtin::*;
pub use resolve::*;

use crate::{
    refs::{ObjectReferences, RefType},
    units::Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, FaceParsingError, GlyphId, OwnedFace};
use pdf_writer::{
    types::{FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::fmt::Write;

/// Font weight, as selected by a text role
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// A font usable by the layout engine. Fonts are stored in the document's arena and
/// referred to by [Id] everywhere else.
pub enum Font {
    /// A parsed TTF / OTF face, embedded whole in the generated PDF
    Embedded { face: OwnedFace },
    /// A standard-14 face that is referenced by name only
    Builtin(BuiltinFont),
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FaceParsingError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font::Embedded { face })
    }

    pub fn builtin(font: BuiltinFont) -> Font {
        Font::Builtin(font)
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Font::Embedded { .. })
    }

    fn units_per_em(&self) -> f32 {
        match self {
            Font::Embedded { face } => face.as_face_ref().units_per_em() as f32,
            Font::Builtin(_) => builtin::UNITS_PER_EM,
        }
    }

    fn scaling(&self, size: Pt) -> f32 {
        size.0 / self.units_per_em()
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match self {
            Font::Embedded { face } => face.as_face_ref().ascender() as f32,
            Font::Builtin(_) => builtin::ASCENDER,
        };
        Pt(ascender * self.scaling(size))
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        let descender = match self {
            Font::Embedded { face } => face.as_face_ref().descender() as f32,
            Font::Builtin(_) => builtin::DESCENDER,
        };
        Pt(descender * self.scaling(size))
    }

    /// Calculate the width of a string at the given size. Characters are measured exactly as
    /// they will be drawn, including the replacement glyph for characters the font lacks.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: f32 = match self {
            Font::Embedded { face } => text
                .chars()
                .map(|ch| {
                    let gid = GlyphId(self.resolved_glyph_id(ch));
                    face.as_face_ref().glyph_hor_advance(gid).unwrap_or_default() as f32
                })
                .sum(),
            Font::Builtin(font) => text
                .chars()
                .map(|ch| font.advance(win_ansi_byte(ch)) as f32)
                .sum(),
        };
        Pt(units * self.scaling(size))
    }

    /// Encode text as the hex digits of a PDF string for the `Tj` operator
    pub fn encode(&self, text: &str) -> String {
        let mut hex = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            // writing to a String cannot fail
            let _ = match self {
                Font::Embedded { .. } => write!(hex, "{:04x}", self.resolved_glyph_id(ch)),
                Font::Builtin(_) => write!(hex, "{:02x}", win_ansi_byte(ch)),
            };
        }
        hex
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match self {
            Font::Embedded { face } => face.as_face_ref().glyph_index(ch).map(|i| i.0),
            Font::Builtin(_) => None,
        }
    }

    /// The glyph drawn for `ch`: its own glyph, else U+FFFD, else `?`, else `.notdef`
    fn resolved_glyph_id(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Whether the face can map unicode text onto glyphs at all
    pub fn has_unicode_cmap(&self) -> bool {
        match self {
            Font::Embedded { face } => face
                .as_face_ref()
                .tables()
                .cmap
                .map(|cmap| cmap.subtables.into_iter().any(|table| table.is_unicode()))
                .unwrap_or(false),
            Font::Builtin(_) => true,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        match self {
            Font::Embedded { face } => {
                let embedded = EmbeddedWriter { face, font_index };
                let cid_font_id = embedded.write_cid(refs, writer);
                let to_unicode_id = embedded.write_to_unicode(refs, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(format!("F{font_index}").as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
            }
            Font::Builtin(builtin) => {
                writer
                    .type1_font(font_id)
                    .base_font(Name(builtin.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
        }
    }
}

/// Writes the object graph for an embedded face: CID font, descriptor, font program, and
/// the ToUnicode map that keeps the text extractable
struct EmbeddedWriter<'a> {
    face: &'a OwnedFace,
    font_index: usize,
}

impl EmbeddedWriter<'_> {
    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn write_cid(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, writer);
        let id = refs.gen(RefType::CidFont(self.font_index));
        let face = self.face.as_face_ref();

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(pdf_writer::types::CidFontType::Type2);
        cid_font.base_font(Name(format!("F{}", self.font_index).as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let sizing = self.glyph_sizing();
        let scaling = 1000.0 / face.units_per_em() as f32;

        // the most popular width becomes the default
        let mut width_counts: HashMap<u16, usize> = HashMap::new();
        for &(_, (width, _)) in sizing.values() {
            *width_counts.entry(width).or_insert(0) += 1;
        }
        let most_common_width = width_counts
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(&width, _)| width as f32 * scaling)
            .unwrap_or(1000.0);

        let mut id_widths: Vec<(u16, f32)> = sizing
            .iter()
            .map(|(&cid, &(_, (width, _)))| (cid, width as f32 * scaling))
            .collect();
        id_widths.sort_by_key(|&(cid, _)| cid);

        let mut widths = cid_font.widths();
        widths.consecutive(0, [1000.0]);
        let mut id_widths = id_widths.into_iter();
        if let Some((first_cid, first_width)) = id_widths.next() {
            let mut start_cid = first_cid;
            let mut current_widths: Vec<f32> = vec![first_width];
            for (cid, width) in id_widths {
                if (cid - start_cid) as usize > current_widths.len() {
                    // gap in the glyph ids, start a new run
                    widths.consecutive(start_cid, current_widths.drain(..));
                    start_cid = cid;
                }
                current_widths.push(width);
            }
            widths.consecutive(start_cid, current_widths);
        }
        widths.finish();

        cid_font.default_width(most_common_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::FontData(self.font_index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, writer);
        let face = self.face.as_face_ref();

        let sizing = self.glyph_sizing();
        let max_width = sizing.values().map(|&(_, (w, _))| w).max().unwrap_or_default();
        let sum_width: usize = sizing.values().map(|&(_, (w, _))| w as usize).sum();
        let avg_width = sum_width as f32 / sizing.len().max(1) as f32;

        let fallback_name = format!("F{}", self.font_index);
        let name = self
            .name_entry(owned_ttf_parser::name_id::POST_SCRIPT_NAME)
            .or_else(|| self.name_entry(owned_ttf_parser::name_id::FULL_NAME))
            .unwrap_or_else(|| fallback_name.clone());
        let family = self
            .name_entry(owned_ttf_parser::name_id::FAMILY)
            .unwrap_or(fallback_name);

        let id = refs.gen(RefType::FontDescriptor(self.font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags: FontFlags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let scaling = 1000.0 / face.units_per_em() as f32;
        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(
            face.x_height()
                .unwrap_or_else(|| face.capital_height().unwrap_or_default())
                as f32
                * scaling,
        );
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);

        descriptor.font_file2(font_data_stream_id);

        id
    }

    /// Every glyph reachable from a unicode cmap, keyed by glyph id
    fn glyph_ids(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();
        let Some(cmap) = self.face.as_face_ref().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    /// Glyph id => (char, (advance, height))
    fn glyph_sizing(&self) -> HashMap<u16, (char, (u16, i16))> {
        let face = self.face.as_face_ref();
        let mut sizing: HashMap<u16, (char, (u16, i16))> = HashMap::new();
        for (id, ch) in self.glyph_ids() {
            let gid = GlyphId(id);
            if let Some(h_advance) = face.glyph_hor_advance(gid) {
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                sizing.insert(id, (ch, (h_advance, height)));
            }
        }
        sizing
    }

    fn write_to_unicode(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::ToUnicode(self.font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mut ids: Vec<(u16, char)> = self.glyph_ids().into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // bfchar blocks hold at most 100 entries sharing a high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        let mut current_block: Vec<(u16, char)> = Vec::new();
        let mut high_byte: u8 = 0;
        for (id, ch) in ids {
            if (id >> 8) as u8 != high_byte || current_block.len() >= 100 {
                if !current_block.is_empty() {
                    blocks.push(std::mem::take(&mut current_block));
                }
                high_byte = (id >> 8) as u8;
            }
            current_block.push((id, ch));
        }
        if !current_block.is_empty() {
            blocks.push(current_block);
        }

        for block in blocks {
            let _ = writeln!(map, "{} beginbfchar", block.len());
            for (id, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                let _ = writeln!(map, "<{id:04x}> <{units}>");
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: Pt, b: f32) -> bool {
        (a.0 - b).abs() < 1e-4
    }

    #[test]
    fn builtin_metrics_scale_with_size() {
        let font = Font::builtin(BuiltinFont::Helvetica);
        assert!(close(font.ascent(Pt(10.0)), 7.18));
        assert!(close(font.descent(Pt(10.0)), -2.07));
        // H e l l o = 722 + 556 + 222 + 222 + 556
        assert!(close(font.width_of_text("Hello", Pt(10.0)), 22.78));
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = Font::builtin(BuiltinFont::Helvetica);
        let bold = Font::builtin(BuiltinFont::HelveticaBold);
        let text = "Experience";
        assert!(bold.width_of_text(text, Pt(11.0)) > regular.width_of_text(text, Pt(11.0)));
    }

    #[test]
    fn builtin_text_is_win_ansi_hex() {
        let font = Font::builtin(BuiltinFont::Helvetica);
        assert_eq!(font.encode("Go•"), "476f95");
        assert_eq!(font.encode("中"), "3f");
        assert_eq!(
            font.width_of_text("中", Pt(10.0)),
            font.width_of_text("?", Pt(10.0))
        );
    }

    #[test]
    fn garbage_does_not_parse_as_a_face() {
        assert!(Font::load(b"definitely not a font".to_vec()).is_err());
    }
}
