//! Colours for each cell state.

use pathviz_core::CellState;

use crate::style::{Color, Style};

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const GREY: Color = Color::from_rgb(128, 128, 128);

/// Background colour a cell in `state` is painted with.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => WHITE,
        CellState::Open => GREEN,
        CellState::Closed => RED,
        CellState::Barrier => BLACK,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Path => PURPLE,
    }
}

/// Full glyph style for a cell in `state`.
pub const fn state_style(state: CellState) -> Style {
    Style {
        fg: GREY,
        bg: state_color(state),
        bold: false,
    }
}
