//! Drawing primitive parameters shared by all canvases

/// Display colors
///
/// The watchface is drawn white on black with dark gray accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    DarkGray,
}

/// Fonts available to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small body text, 14 px line height
    Gothic14,
    /// Large bold text (date)
    Gothic28Bold,
    /// Large digits (time)
    Leco32BoldNumbers,
}

impl Font {
    /// Nominal line height in pixels
    pub const fn line_height(self) -> u32 {
        match self {
            Font::Gothic14 => 14,
            Font::Gothic28Bold => 28,
            Font::Leco32BoldNumbers => 32,
        }
    }
}

/// Horizontal text alignment inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// What to do with text wider than its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Overflow {
    /// Break at spaces onto following lines
    #[default]
    WordWrap,
    /// Keep a single line and cut it at the box edge
    Clip,
}

/// Complete text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub font: Font,
    pub alignment: TextAlignment,
    pub overflow: Overflow,
    pub color: Color,
}

impl TextStyle {
    /// White, left aligned, word-wrapped text in `font`
    pub const fn new(font: Font) -> Self {
        Self {
            font,
            alignment: TextAlignment::Left,
            overflow: Overflow::WordWrap,
            color: Color::White,
        }
    }

    /// Same style with a different alignment
    pub const fn aligned(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Opaque handle to a bitmap loaded by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapHandle(pub u16);

/// How bitmap pixels are combined with the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Compositing {
    /// Copy every pixel, set and unset
    Assign,
    /// Only draw set pixels, leaving the background visible
    Set,
}
