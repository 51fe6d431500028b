//! Visual styling: [`Color`] and [`Style`].

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal colour: either the terminal's own default or an RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Reset,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    pub(crate) fn to_crossterm(self) -> crossterm::style::Color {
        match self {
            Self::Reset => crossterm::style::Color::Reset,
            Self::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Complete visual style for a single glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    /// Set the foreground colour (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background colour (builder).
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set bold text (builder).
    #[inline]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}
