//! The PDF standard-14 Helvetica faces, used whenever no embeddable font is found.
//!
//! Standard fonts are not embedded: every conforming reader ships them. We still need their
//! advance widths to measure text, so the AFM widths for the printable ASCII range are kept
//! here as static tables (in 1/1000 em). Text is written with `WinAnsiEncoding`; characters
//! outside that encoding are drawn, and measured, as `?`.

/// Which built-in face
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
}

pub(crate) const UNITS_PER_EM: f32 = 1000.0;
pub(crate) const ASCENDER: f32 = 718.0;
pub(crate) const DESCENDER: f32 = -207.0;

/// Width of WinAnsi bytes above 0x7E that have no entry in [BuiltinFont::special_width]
const AVERAGE_WIDTH: u16 = 556;

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    //  0    1    2    3    4    5    6    7    8    9
      556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    //  :    ;    <    =    >    ?     @
      278, 278, 584, 584, 584, 556, 1015,
    //  A    B    C    D    E    F    G    H    I    J    K    L    M
      667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    //  N    O    P    Q    R    S    T    U    V    W    X    Y    Z
      722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    //  [    \    ]    ^    _    `
      278, 278, 278, 469, 556, 333,
    //  a    b    c    d    e    f    g    h    i    j    k    l    m
      556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    //  n    o    p    q    r    s    t    u    v    w    x    y    z
      556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    //  {    |    }    ~
      334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    //  0    1    2    3    4    5    6    7    8    9
      556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    //  :    ;    <    =    >    ?    @
      333, 333, 584, 584, 584, 611, 975,
    //  A    B    C    D    E    F    G    H    I    J    K    L    M
      722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    //  N    O    P    Q    R    S    T    U    V    W    X    Y    Z
      722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    //  [    \    ]    ^    _    `
      333, 278, 333, 584, 556, 333,
    //  a    b    c    d    e    f    g    h    i    j    k    l    m
      556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    //  n    o    p    q    r    s    t    u    v    w    x    y    z
      611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    //  {    |    }    ~
      389, 280, 389, 584,
];

impl BuiltinFont {
    /// The PostScript name readers use to find the face
    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn table(self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::Helvetica => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Widths of the punctuation the layout actually draws outside ASCII
    fn special_width(self, byte: u8) -> Option<u16> {
        let bold = self == BuiltinFont::HelveticaBold;
        match byte {
            0x85 | 0x97 => Some(1000),
            0x91 | 0x92 => Some(if bold { 278 } else { 222 }),
            0x93 | 0x94 => Some(if bold { 500 } else { 333 }),
            0x95 => Some(350),
            0x96 => Some(556),
            0xA0 | 0xB7 => Some(278),
            _ => None,
        }
    }

    /// Advance width of a WinAnsi byte in 1/1000 em
    pub fn advance(self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => self.table()[(byte - 0x20) as usize],
            _ => self.special_width(byte).unwrap_or(AVERAGE_WIDTH),
        }
    }
}

/// Map a character onto its `WinAnsiEncoding` byte, substituting `?` for anything the
/// encoding cannot represent
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\u{0020}'..='\u{007E}' => ch as u8,
        '\u{00A0}'..='\u{00FF}' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => b'?',
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_widths_come_from_the_afm_tables() {
        assert_eq!(BuiltinFont::Helvetica.advance(b' '), 278);
        assert_eq!(BuiltinFont::Helvetica.advance(b'i'), 222);
        assert_eq!(BuiltinFont::Helvetica.advance(b'W'), 944);
        assert_eq!(BuiltinFont::HelveticaBold.advance(b'i'), 278);
        assert_eq!(BuiltinFont::HelveticaBold.advance(b'@'), 975);
        assert_eq!(BuiltinFont::Helvetica.advance(b'~'), 584);
    }

    #[test]
    fn punctuation_outside_ascii_has_widths() {
        assert_eq!(BuiltinFont::Helvetica.advance(win_ansi_byte('•')), 350);
        assert_eq!(BuiltinFont::Helvetica.advance(win_ansi_byte('—')), 1000);
        assert_eq!(BuiltinFont::HelveticaBold.advance(win_ansi_byte('·')), 278);
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        assert_eq!(win_ansi_byte('é'), 0xE9);
        assert_eq!(win_ansi_byte('€'), 0x80);
        assert_eq!(win_ansi_byte('中'), b'?');
        assert_eq!(win_ansi_byte('\t'), b'?');
    }
}
