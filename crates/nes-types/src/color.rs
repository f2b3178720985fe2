//! RGBA colors and the named-color table.
//!
//! Named colors follow the usual web/X11 names. Lookup is case-insensitive,
//! which is what the console's `print <text> <color>` command relies on.

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GOLD: Self = Self::rgb(255, 215, 0);
    pub const AQUA: Self = Self::rgb(0, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Look up a named color, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
    match s.len() {
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Every color name [`Color::from_name`] understands, in table order.
pub fn color_names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|&(n, _)| n)
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("Transparent", Color::TRANSPARENT),
    ("AliceBlue", Color::rgb(240, 248, 255)),
    ("AntiqueWhite", Color::rgb(250, 235, 215)),
    ("Aqua", Color::AQUA),
    ("Aquamarine", Color::rgb(127, 255, 212)),
    ("Azure", Color::rgb(240, 255, 255)),
    ("Beige", Color::rgb(245, 245, 220)),
    ("Black", Color::BLACK),
    ("Blue", Color::rgb(0, 0, 255)),
    ("BlueViolet", Color::rgb(138, 43, 226)),
    ("Brown", Color::rgb(165, 42, 42)),
    ("CadetBlue", Color::rgb(95, 158, 160)),
    ("Chartreuse", Color::rgb(127, 255, 0)),
    ("Chocolate", Color::rgb(210, 105, 30)),
    ("Coral", Color::rgb(255, 127, 80)),
    ("CornflowerBlue", Color::rgb(100, 149, 237)),
    ("Crimson", Color::rgb(220, 20, 60)),
    ("Cyan", Color::rgb(0, 255, 255)),
    ("DarkBlue", Color::rgb(0, 0, 139)),
    ("DarkCyan", Color::rgb(0, 139, 139)),
    ("DarkGoldenrod", Color::rgb(184, 134, 11)),
    ("DarkGray", Color::rgb(169, 169, 169)),
    ("DarkGreen", Color::rgb(0, 100, 0)),
    ("DarkMagenta", Color::rgb(139, 0, 139)),
    ("DarkOrange", Color::rgb(255, 140, 0)),
    ("DarkRed", Color::rgb(139, 0, 0)),
    ("DarkViolet", Color::rgb(148, 0, 211)),
    ("DeepPink", Color::rgb(255, 20, 147)),
    ("DeepSkyBlue", Color::rgb(0, 191, 255)),
    ("DimGray", Color::rgb(105, 105, 105)),
    ("DodgerBlue", Color::rgb(30, 144, 255)),
    ("Firebrick", Color::rgb(178, 34, 34)),
    ("ForestGreen", Color::rgb(34, 139, 34)),
    ("Fuchsia", Color::rgb(255, 0, 255)),
    ("Gold", Color::GOLD),
    ("Goldenrod", Color::rgb(218, 165, 32)),
    ("Gray", Color::GRAY),
    ("Green", Color::rgb(0, 128, 0)),
    ("GreenYellow", Color::rgb(173, 255, 47)),
    ("HotPink", Color::rgb(255, 105, 180)),
    ("IndianRed", Color::rgb(205, 92, 92)),
    ("Indigo", Color::rgb(75, 0, 130)),
    ("Ivory", Color::rgb(255, 255, 240)),
    ("Khaki", Color::rgb(240, 230, 140)),
    ("Lavender", Color::rgb(230, 230, 250)),
    ("LawnGreen", Color::rgb(124, 252, 0)),
    ("LightBlue", Color::rgb(173, 216, 230)),
    ("LightCoral", Color::rgb(240, 128, 128)),
    ("LightGray", Color::rgb(211, 211, 211)),
    ("LightGreen", Color::rgb(144, 238, 144)),
    ("LightPink", Color::rgb(255, 182, 193)),
    ("LightSkyBlue", Color::rgb(135, 206, 250)),
    ("LightYellow", Color::rgb(255, 255, 224)),
    ("Lime", Color::LIME),
    ("LimeGreen", Color::rgb(50, 205, 50)),
    ("Magenta", Color::rgb(255, 0, 255)),
    ("Maroon", Color::rgb(128, 0, 0)),
    ("MediumPurple", Color::rgb(147, 112, 219)),
    ("MidnightBlue", Color::rgb(25, 25, 112)),
    ("Navy", Color::rgb(0, 0, 128)),
    ("Olive", Color::rgb(128, 128, 0)),
    ("Orange", Color::rgb(255, 165, 0)),
    ("OrangeRed", Color::rgb(255, 69, 0)),
    ("Orchid", Color::rgb(218, 112, 214)),
    ("Pink", Color::rgb(255, 192, 203)),
    ("Plum", Color::rgb(221, 160, 221)),
    ("Purple", Color::rgb(128, 0, 128)),
    ("Red", Color::RED),
    ("RoyalBlue", Color::rgb(65, 105, 225)),
    ("Salmon", Color::rgb(250, 128, 114)),
    ("SeaGreen", Color::rgb(46, 139, 87)),
    ("Silver", Color::rgb(192, 192, 192)),
    ("SkyBlue", Color::rgb(135, 206, 235)),
    ("SlateGray", Color::rgb(112, 128, 144)),
    ("SpringGreen", Color::rgb(0, 255, 127)),
    ("SteelBlue", Color::rgb(70, 130, 180)),
    ("Tan", Color::rgb(210, 180, 140)),
    ("Teal", Color::rgb(0, 128, 128)),
    ("Tomato", Color::rgb(255, 99, 71)),
    ("Turquoise", Color::rgb(64, 224, 208)),
    ("Violet", Color::rgb(238, 130, 238)),
    ("Wheat", Color::rgb(245, 222, 179)),
    ("White", Color::WHITE),
    ("WhiteSmoke", Color::rgb(245, 245, 245)),
    ("Yellow", Color::YELLOW),
    ("YellowGreen", Color::rgb(154, 205, 50)),
];
