//! Level map widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use warren_core::config::GridConfig;
use warren_core::layout::LevelGraph;

use crate::display::{rasterize, GlyphSet, TileGlyph};

/// Widget for rendering the generated level
pub struct LevelWidget<'a> {
    graph: &'a LevelGraph,
    cfg: &'a GridConfig,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> LevelWidget<'a> {
    pub fn new(graph: &'a LevelGraph, cfg: &'a GridConfig, glyphs: &'a dyn GlyphSet) -> Self {
        Self { graph, cfg, glyphs }
    }

    fn tile_style(tile: TileGlyph) -> Style {
        let color = match tile {
            TileGlyph::Void => Color::Black,
            TileGlyph::ChamberFloor => Color::White,
            TileGlyph::CorridorFloor => Color::DarkGray,
            TileGlyph::Door => Color::Yellow,
            _ => Color::Gray,
        };
        Style::default().fg(color)
    }
}

impl Widget for LevelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Warren");

        let inner = block.inner(area);
        block.render(area, buf);

        // Screen row 0 is the top of the level
        let grid = rasterize(self.graph, self.cfg);
        for (y, row) in grid.iter().rev().enumerate() {
            if y >= inner.height as usize {
                break;
            }
            for (x, &tile) in row.iter().enumerate() {
                if x >= inner.width as usize {
                    break;
                }
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(self.glyphs.glyph(tile));
                    cell.set_style(Self::tile_style(tile));
                }
            }
        }
    }
}
