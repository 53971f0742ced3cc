//! TUI rendering for the Braille explorer using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{pulse_intensity, pulse_style};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use braille_engine::{
    App, CellGeometry, Dot, DotPattern, DotPulse, InputMode, Token, TouchSurface,
};

/// Terminal rows per full grid at the base scale: 3 rows of (3 target + 1 gap).
const GRID_BASE_ROWS: u16 = 12;
const GRID_MAX_ROWS: u16 = 24;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Source text
            Constraint::Min(5),    // Grid + details
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_source(frame, app, chunks[0], &palette);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_grid(frame, app, body[0], &palette, &glyphs);
    draw_details(frame, app, body[1], &palette, &glyphs);
    draw_input(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn panel_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(format!(" {title} "), styles::title(palette)))
}

fn draw_source(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = panel_block("Braille", palette);
    let inner_width = block.inner(area).width as usize;
    let source = app.session().navigator().sequence().source();
    let line = if source.is_empty() {
        Line::from(Span::styled(
            "No text yet. Press i to type a sentence.",
            Style::default().fg(palette.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            truncate_with_ellipsis(source, inner_width),
            Style::default().fg(palette.text_primary),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel_block("Cell", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(surface) = grid_surface(inner) else {
        app.clear_touch_surface();
        frame.render_widget(
            Paragraph::new(Span::styled(
                "too small",
                Style::default().fg(palette.text_muted),
            )),
            inner,
        );
        return;
    };

    app.set_touch_surface(surface);
    let grid = DotGrid {
        surface,
        pattern: app.current_cell().pattern,
        confirmed: app.confirmed(),
        pulses: app.pulses(),
        palette,
        glyphs,
    };
    frame.render_widget(grid, surface_rect(surface));
}

/// Largest grid that fits `inner`, centered, keeping the base 5:3 shape.
fn grid_surface(inner: Rect) -> Option<TouchSurface> {
    let mut rows = if inner.height >= GRID_BASE_ROWS {
        (inner.height / GRID_BASE_ROWS * GRID_BASE_ROWS).min(GRID_MAX_ROWS)
    } else {
        inner.height
    };
    let mut cols = rows * 5 / 3;
    if cols > inner.width {
        cols = inner.width;
        rows = cols * 3 / 5;
    }
    if rows < 3 || cols < 2 {
        return None;
    }
    let x = inner.x + (inner.width - cols) / 2;
    let y = inner.y + (inner.height - rows) / 2;
    Some(TouchSurface::new(x, y, cols, rows))
}

fn surface_rect(surface: TouchSurface) -> Rect {
    Rect::new(surface.x, surface.y, surface.width, surface.height)
}

/// The six touch targets of the active cell.
///
/// Every terminal cell is classified through the same mapping the touch path
/// uses, so what is drawn as dot N is exactly what confirms dot N.
struct DotGrid<'a> {
    surface: TouchSurface,
    pattern: DotPattern,
    confirmed: DotPattern,
    pulses: &'a [DotPulse],
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl DotGrid<'_> {
    fn fill(&self, dot: Dot) -> (&'static str, Style) {
        if !self.pattern.contains(dot) {
            return (self.glyphs.flat, styles::dot_flat(self.palette));
        }
        if let Some(intensity) = pulse_intensity(self.pulses, dot) {
            return (self.glyphs.raised, pulse_style(self.palette, intensity));
        }
        if self.confirmed.contains(dot) {
            (self.glyphs.raised, styles::dot_confirmed(self.palette))
        } else {
            (self.glyphs.raised, styles::dot_raised(self.palette))
        }
    }
}

impl Widget for DotGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = CellGeometry::STANDARD;
        // (min_x, min_y, max_x, max_y) per dot
        let mut bounds: [Option<(u16, u16, u16, u16)>; 6] = [None; 6];

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let point = self.surface.to_cell_point(x, y);
                let Some(dot) = geometry.target_at(point) else {
                    continue;
                };
                let (symbol, style) = self.fill(dot);
                if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
                let slot = &mut bounds[usize::from(dot.get() - 1)];
                *slot = Some(match *slot {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }

        for dot in Dot::ALL {
            let Some((x0, y0, x1, y1)) = bounds[usize::from(dot.get() - 1)] else {
                continue;
            };
            let label_style = if self.pattern.contains(dot) {
                Style::default()
                    .fg(self.palette.bg_dark)
                    .bg(self.fill(dot).1.fg.unwrap_or(self.palette.dot_raised))
                    .add_modifier(Modifier::BOLD)
            } else {
                styles::dot_flat(self.palette)
            };
            let label = if self.confirmed.contains(dot) && self.pattern.contains(dot) {
                self.glyphs.confirmed.to_string()
            } else {
                dot.to_string()
            };
            buf.set_string(
                x0 + (x1 - x0) / 2,
                y0 + (y1 - y0) / 2,
                label,
                label_style,
            );
        }
    }
}

fn draw_details(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel_block("Details", palette);
    let options = app.ui_options();
    let navigator = app.session().navigator();
    let cell = app.current_cell();

    let label_style = Style::default().fg(palette.text_muted);
    let value_style = Style::default().fg(palette.text_primary);
    let field = |name: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{name:<9}"), label_style),
            Span::styled(value, style),
        ])
    };

    let position = navigator
        .position()
        .map_or_else(|| "no text".to_string(), |(at, len)| format!("{at} of {len}"));
    let token = match cell.token {
        Token::Contraction(word) => format!("{word} (contraction)"),
        other => other.label(),
    };

    let mut lines = vec![
        field("Cell", position, value_style),
        field(
            "Token",
            token,
            value_style.add_modifier(Modifier::BOLD),
        ),
        field("Dots", cell.pattern.to_string(), value_style),
    ];
    if options.show_unicode && !options.ascii_only {
        lines.push(field(
            "Braille",
            cell.pattern.to_unicode().to_string(),
            Style::default().fg(palette.accent),
        ));
    }
    lines.push(field(
        "Touched",
        app.confirmed().to_string(),
        Style::default().fg(palette.success),
    ));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}/h", glyphs.arrow_left),
            styles::key_highlight(palette),
        ),
        Span::styled(" previous  ", styles::key_hint(palette)),
        Span::styled(
            format!("{}/l", glyphs.arrow_right),
            styles::key_highlight(palette),
        ),
        Span::styled(" next", styles::key_hint(palette)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("1-6", styles::key_highlight(palette)),
        Span::styled(" touch a dot  ", styles::key_hint(palette)),
        Span::styled("drag", styles::key_highlight(palette)),
        Span::styled(" explore", styles::key_hint(palette)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mode = app.input_mode();
    let (mode_label, mode_style, border_style) = match mode {
        InputMode::Normal => (
            "NORMAL",
            styles::mode_normal(palette),
            Style::default().fg(palette.text_muted),
        ),
        InputMode::Insert => (
            "INSERT",
            styles::mode_insert(palette),
            Style::default().fg(palette.green),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(format!(" {mode_label} "), mode_style));
    let inner = block.inner(area);

    let mut cursor_pos = None;
    let line = match mode {
        InputMode::Normal => Line::from(vec![
            Span::styled("i", styles::key_highlight(palette)),
            Span::styled(" type text  ", styles::key_hint(palette)),
            Span::styled(
                format!("{}{}", glyphs.arrow_left, glyphs.arrow_right),
                styles::key_highlight(palette),
            ),
            Span::styled(" move  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ]),
        InputMode::Insert => {
            let prefix = format!("{} ", glyphs.prompt);
            let available = (inner.width as usize).saturating_sub(prefix.width() + 1);
            let visible = tail_within(app.draft(), available);
            let cursor_x = inner.x + (prefix.width() + visible.width()) as u16;
            cursor_pos = Some((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(palette.green)),
                Span::styled(visible.to_string(), Style::default().fg(palette.text_primary)),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if let Some((cursor_x, cursor_y)) = cursor_pos {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (status_text, status_style) = match app.status() {
        Some(status) => {
            let color = if status.is_error() {
                palette.error
            } else {
                palette.text_secondary
            };
            (status.text().to_string(), Style::default().fg(color))
        }
        None => ("Ready".to_string(), Style::default().fg(palette.text_muted)),
    };

    let mut spans = vec![Span::raw(" "), Span::styled(status_text, status_style)];
    if let Some((at, len)) = app.session().navigator().position() {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ));
        spans.push(Span::styled(
            format!("{at}/{len}"),
            Style::default().fg(palette.text_secondary),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max - 3).collect();
        format!("{head}...")
    }
}

/// Longest suffix of `text` that fits in `width` columns.
fn tail_within(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}
