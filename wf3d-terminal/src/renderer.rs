/// Character-cell canvas for terminal rendering
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use wf3d_core::{Canvas, Color, InputEvent, PointerButtons, PointerPosition, ScreenPoint};

const VERTEX_CHAR: char = '@';

/// Mapping between the square logical window and a block of terminal cells.
///
/// Row 0 of the terminal holds the status line; the viewport starts below it.
/// Cells are assumed to be twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: usize,
    pub rows: usize,
    window_size: f64,
}

impl Viewport {
    pub fn fit(term_width: u16, term_height: u16, window_size: f64) -> Self {
        let avail_rows = usize::from(term_height.saturating_sub(1)).max(1);
        let cols = usize::from(term_width).min(avail_rows * 2).max(2);
        Self {
            cols,
            rows: (cols / 2).max(1),
            window_size,
        }
    }

    fn px_per_col(&self) -> f64 {
        self.window_size / self.cols as f64
    }

    fn px_per_row(&self) -> f64 {
        self.window_size / self.rows as f64
    }

    /// Cell containing a window point; may lie outside the viewport
    pub fn to_cell(&self, point: ScreenPoint) -> (i64, i64) {
        (
            (point.x / self.px_per_col()).floor() as i64,
            (point.y / self.px_per_row()).floor() as i64,
        )
    }

    /// Window point at the centre of a terminal cell
    pub fn to_window(&self, column: u16, row: u16) -> PointerPosition {
        let viewport_row = f64::from(row) - 1.0;
        PointerPosition::new(
            (f64::from(column) + 0.5) * self.px_per_col(),
            (viewport_row + 0.5) * self.px_per_row(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

/// Terminal implementation of the viewer canvas
pub struct TerminalCanvas<W: Write> {
    out: W,
    viewport: Viewport,
    background: Color,
    cells: Vec<Cell>,
    status: String,
    last_second: Instant,
    frame_count: u32,
    fps: f32,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, term_width: u16, term_height: u16, window_size: f64) -> Self {
        let viewport = Viewport::fit(term_width, term_height, window_size);
        Self {
            out,
            viewport,
            background: Color::WHITE,
            cells: vec![blank(Color::BLACK); viewport.cols * viewport.rows],
            status: String::new(),
            last_second: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Re-fit the viewport after the terminal changes size
    pub fn resize(&mut self, term_width: u16, term_height: u16) {
        self.viewport = Viewport::fit(term_width, term_height, self.viewport.window_size);
        self.cells = vec![blank(self.background); self.viewport.cols * self.viewport.rows];
    }

    fn char_at(&self, col: usize, row: usize) -> char {
        self.cells[row * self.viewport.cols + col].ch
    }

    fn plot(&mut self, col: i64, row: i64, ch: char, fg: Color) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.viewport.cols && row < self.viewport.rows {
            self.cells[row * self.viewport.cols + col] = Cell { ch, fg };
        }
    }

    /// Plot a square brush of `half` cells around (col, row)
    fn stamp(&mut self, col: i64, row: i64, half: i64, ch: char, fg: Color) {
        for r in row - half..=row + half {
            for c in col - half..=col + half {
                self.plot(c, r, ch, fg);
            }
        }
    }

    fn translate(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => {
                let buttons = match kind {
                    MouseEventKind::Drag(button) => pressed(button),
                    MouseEventKind::Moved => PointerButtons::NONE,
                    _ => return None,
                };
                Some(InputEvent::PointerMove {
                    position: self.viewport.to_window(column, row),
                    buttons,
                })
            }
            Event::Resize(width, height) => {
                self.resize(width, height);
                None
            }
            _ => None,
        }
    }

    fn tick_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.last_second.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.last_second = Instant::now();
        }
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    type Error = io::Error;

    fn clear(&mut self, color: Color) -> io::Result<()> {
        self.background = color;
        self.cells.fill(blank(color));
        Ok(())
    }

    fn draw_point(&mut self, center: ScreenPoint, color: Color, radius: f64) -> io::Result<()> {
        let size = self.viewport.window_size;
        let radius = radius.clamp(0.0, size);
        let visible = |v: f64| v.is_finite() && v >= -radius && v <= size + radius;
        if !visible(center.x) || !visible(center.y) {
            return Ok(());
        }

        let (cc, cr) = self.viewport.to_cell(center);
        let rx = radius / self.viewport.px_per_col();
        let ry = radius / self.viewport.px_per_row();

        self.plot(cc, cr, VERTEX_CHAR, color);
        let (reach_x, reach_y) = (rx.floor() as i64, ry.floor() as i64);
        for r in -reach_y..=reach_y {
            for c in -reach_x..=reach_x {
                let nx = c as f64 / rx.max(f64::EPSILON);
                let ny = r as f64 / ry.max(f64::EPSILON);
                if nx * nx + ny * ny <= 1.0 {
                    self.plot(cc + c, cr + r, VERTEX_CHAR, color);
                }
            }
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
        width: f64,
    ) -> io::Result<()> {
        let ch = line_char(to.x - from.x, to.y - from.y);
        let Some((from, to)) = clip_segment(from, to, self.viewport.window_size) else {
            return Ok(());
        };
        let (x0, y0) = self.viewport.to_cell(from);
        let (x1, y1) = self.viewport.to_cell(to);
        let half = (width / self.viewport.px_per_col() / 2.0)
            .floor()
            .clamp(0.0, self.viewport.cols as f64) as i64;

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.stamp(x, y, half, ch, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = self.translate(event::read()?) {
                events.push(input);
            }
        }
        Ok(events)
    }

    fn present(&mut self) -> io::Result<()> {
        self.tick_fps();

        let bg = to_term(self.background);
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(ResetColor)?;
        self.out.queue(SetForegroundColor(style::Color::Yellow))?;
        self.out
            .queue(Print(format!("{} | FPS: {:.1}", self.status, self.fps)))?;
        self.out
            .queue(crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine))?;

        for row in 0..self.viewport.rows {
            self.out.queue(cursor::MoveTo(0, row as u16 + 1))?;
            self.out.queue(SetBackgroundColor(bg))?;
            let mut current_fg = None;
            for col in 0..self.viewport.cols {
                let cell = self.cells[row * self.viewport.cols + col];
                if current_fg != Some(cell.fg) {
                    self.out.queue(SetForegroundColor(to_term(cell.fg)))?;
                    current_fg = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

fn blank(fg: Color) -> Cell {
    Cell { ch: ' ', fg }
}

fn to_term(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn pressed(button: MouseButton) -> PointerButtons {
    match button {
        MouseButton::Left => PointerButtons::PRIMARY,
        MouseButton::Right => PointerButtons {
            secondary: true,
            ..PointerButtons::NONE
        },
        MouseButton::Middle => PointerButtons {
            middle: true,
            ..PointerButtons::NONE
        },
    }
}

/// Liang-Barsky clip of a segment to the window square `[0, size]²`.
/// Returns `None` when nothing of the segment is inside.
fn clip_segment(
    from: ScreenPoint,
    to: ScreenPoint,
    size: f64,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let d = to - from;
    if !(from.x.is_finite() && from.y.is_finite() && d.x.is_finite() && d.y.is_finite()) {
        return None;
    }

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-d.x, from.x),
        (d.x, size - from.x),
        (-d.y, from.y),
        (d.y, size - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((from + d * t0, from + d * t1))
}

/// Pick a glyph that follows the slope of a segment in window space
fn line_char(dx: f64, dy: f64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= 2.0 * ay {
        '-'
    } else if ay >= 2.0 * ax {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}
