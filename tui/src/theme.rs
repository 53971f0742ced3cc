//! Color theme and glyphs for the Braille TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use braille_engine::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const SUCCESS: Color = GREEN;
    pub const ERROR: Color = RED;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub peach: Color,
    pub green: Color,
    pub yellow: Color,
    /// Fill of a raised dot.
    pub dot_raised: Color,
    /// Fill of a raised dot confirmed during the current gesture.
    pub dot_confirmed: Color,
    /// Peak color of a confirmation pulse.
    pub dot_pulse: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            error: colors::ERROR,
            peach: colors::PEACH,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            dot_raised: colors::PRIMARY,
            dot_confirmed: colors::SUCCESS,
            dot_pulse: colors::YELLOW,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            peach: Color::Yellow,
            green: Color::Green,
            yellow: Color::Yellow,
            dot_raised: Color::White,
            dot_confirmed: Color::Green,
            dot_pulse: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for the dot grid and hints.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Fill of a raised dot position.
    pub raised: &'static str,
    /// Fill of a flat dot position.
    pub flat: &'static str,
    pub confirmed: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub prompt: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            raised: "#",
            flat: ".",
            confirmed: "*",
            arrow_left: "<-",
            arrow_right: "->",
            prompt: ">",
            separator: "|",
        }
    } else {
        Glyphs {
            raised: "█",
            flat: "·",
            confirmed: "✓",
            arrow_left: "←",
            arrow_right: "→",
            prompt: "❯",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_normal(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_insert(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.green)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn dot_raised(palette: &Palette) -> Style {
        Style::default().fg(palette.dot_raised).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn dot_flat(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn dot_confirmed(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.dot_confirmed)
            .bg(palette.bg_panel)
            .add_modifier(Modifier::BOLD)
    }
}
