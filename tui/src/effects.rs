//! Confirmation pulse rendering.

use ratatui::style::{Color, Modifier, Style};

use braille_engine::{Dot, DotPulse};

use crate::theme::Palette;

/// Strongest active pulse on `dot`, if any.
#[must_use]
pub fn pulse_intensity(pulses: &[DotPulse], dot: Dot) -> Option<f32> {
    pulses
        .iter()
        .filter(|pulse| pulse.dot() == dot)
        .map(DotPulse::intensity)
        .reduce(f32::max)
        .filter(|intensity| *intensity > 0.0)
}

/// Style of a raised dot under a pulse of the given strength.
#[must_use]
pub fn pulse_style(palette: &Palette, intensity: f32) -> Style {
    let t = ease_out_cubic(intensity);
    let fg = blend(palette.dot_confirmed, palette.dot_pulse, t);
    let style = Style::default().fg(fg).bg(palette.bg_highlight);
    if t > 0.5 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Linear mix from `from` to `to`. Named colors switch at the midpoint.
fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            mix(r1, r2, t),
            mix(g1, g2, t),
            mix(b1, b2, t),
        ),
        _ if t >= 0.5 => to,
        _ => from,
    }
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
