//! Colours of glyphs, rules and background boxes.

/// A colour, given by its red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBA(pub u8, pub u8, pub u8, pub u8);

impl RGBA {
    /// Opaque black, the colour of text unless told otherwise
    pub const BLACK : Self = RGBA(0, 0, 0, 0xff);
    /// Opaque white
    pub const WHITE : Self = RGBA(0xff, 0xff, 0xff, 0xff);
    /// Opaque red
    pub const RED : Self = RGBA(0xff, 0, 0, 0xff);
    /// Opaque blue, the default colour of placeholders
    pub const BLUE : Self = RGBA(0, 0, 0xff, 0xff);
    /// Fully transparent
    pub const TRANSPARENT : Self = RGBA(0, 0, 0, 0);

    /// Opaque colour from its channels
    pub const fn rgb(r : u8, g : u8, b : u8) -> Self {
        RGBA(r, g, b, 0xff)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is required.
    pub fn from_hex(hex : &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |range : std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();

        match digits.len() {
            3 => {
                let r = channel(0 .. 1)?;
                let g = channel(1 .. 2)?;
                let b = channel(2 .. 3)?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            },
            6 => Some(Self::rgb(channel(0 .. 2)?, channel(2 .. 4)?, channel(4 .. 6)?)),
            8 => Some(RGBA(channel(0 .. 2)?, channel(2 .. 4)?, channel(4 .. 6)?, channel(6 .. 8)?)),
            _ => None,
        }
    }

    /// Named colours understood by colour atoms, falling back to hex notation.
    pub fn from_name(name : &str) -> Option<Self> {
        match name {
            "black"   => Some(Self::BLACK),
            "white"   => Some(Self::WHITE),
            "red"     => Some(Self::RED),
            "blue"    => Some(Self::BLUE),
            "green"   => Some(Self::rgb(0, 0x80, 0)),
            "gray"    => Some(Self::rgb(0x80, 0x80, 0x80)),
            "cyan"    => Some(Self::rgb(0, 0xff, 0xff)),
            "magenta" => Some(Self::rgb(0xff, 0, 0xff)),
            "yellow"  => Some(Self::rgb(0xff, 0xff, 0)),
            "orange"  => Some(Self::rgb(0xff, 0xa5, 0)),
            _         => Self::from_hex(name),
        }
    }

    /// Is the colour fully transparent?
    pub fn is_transparent(self) -> bool {
        self.3 == 0
    }
}

impl Default for RGBA {
    fn default() -> Self {
        Self::BLACK
    }
}
