use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::renderer::{Renderer, Surface};
use crate::game::{GameState, Playfield};

/// Terminal columns used for one grid cell, so cells look square
const COLUMNS_PER_CELL: i32 = 2;

/// A `Surface` backed by a ratatui buffer.
///
/// One grid cell covers two columns and one row. Rows are flipped because
/// the playfield is y-up and the terminal is y-down.
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    playfield: Playfield,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, playfield: Playfield) -> Self {
        Self {
            buf,
            area,
            playfield,
        }
    }

    fn paint(&mut self, columns: (i32, i32), rows: (i32, i32), color: Color) {
        let width = self.area.width as i32;
        let height = self.area.height as i32;

        for row in rows.0.max(0)..rows.1.min(height) {
            for column in columns.0.max(0)..columns.1.min(width) {
                let x = self.area.x + column as u16;
                let y = self.area.y + row as u16;
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn clear(&mut self, color: Color) {
        let columns = self.playfield.columns() * COLUMNS_PER_CELL;
        let rows = self.playfield.rows();
        self.paint((0, columns), (0, rows), color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let grid = self.playfield.grid_size;
        let top = self.playfield.height - (y + height);
        let bottom = self.playfield.height - y;

        let columns = (
            (x * COLUMNS_PER_CELL).div_euclid(grid),
            ((x + width) * COLUMNS_PER_CELL).div_euclid(grid),
        );
        let rows = (top.div_euclid(grid), bottom.div_euclid(grid));
        self.paint(columns, rows, color);
    }
}

/// Bordered view of the playfield
pub struct PlayfieldView<'a> {
    state: &'a GameState,
    renderer: &'a Renderer,
}

impl<'a> PlayfieldView<'a> {
    pub fn new(state: &'a GameState, renderer: &'a Renderer) -> Self {
        Self { state, renderer }
    }

    /// Terminal size needed to show the whole playfield with its border
    pub fn required_size(playfield: &Playfield) -> (u16, u16) {
        let width = playfield.columns() * COLUMNS_PER_CELL + 2;
        let height = playfield.rows() + 2;
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }
}

impl Widget for PlayfieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border) = if self.state.is_running() {
            (" Snake ", Color::White)
        } else {
            (" Snake - game over ", Color::Red)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(border))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut surface = TerminalSurface::new(buf, inner, self.state.playfield);
        self.renderer.draw(self.state, &mut surface);
    }
}
