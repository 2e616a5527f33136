/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a colour from a packed `0xRRGGBB` value, as written in stylesheets
    pub const fn from_hex(hex: u32) -> Colour {
        Colour::new_rgb_bytes((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const INK: Colour = Colour::from_hex(0x111111);
    pub const TEXT: Colour = Colour::from_hex(0x222222);
    pub const SUBTITLE: Colour = Colour::from_hex(0x333333);
    pub const CONTACT: Colour = Colour::from_hex(0x444444);
    pub const MUTED: Colour = Colour::from_hex(0x555555);
    pub const FOOTER: Colour = Colour::from_hex(0x888888);
    pub const RULE: Colour = Colour::from_hex(0xD6D6D6);
    pub const ACCENT: Colour = Colour::from_hex(0x1F3A5F);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_colours_unpack_channels() {
        assert_eq!(Colour::from_hex(0xFF0000), Colour::new_rgb(1.0, 0.0, 0.0));
        match colours::RULE {
            Colour::RGB { r, g, b } => {
                assert!((r - 214.0 / 255.0).abs() < f32::EPSILON);
                assert_eq!(r, g);
                assert_eq!(g, b);
            }
            other => panic!("expected an RGB colour, got {other:?}"),
        }
    }
}
