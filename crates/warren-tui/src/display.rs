//! Glyph system for TUI rendering
//!
//! Rasterizes a level graph into one glyph per tile, with both classic
//! ASCII and Unicode box-drawing flavors.

use strum::{Display, EnumString, VariantNames};

use warren_core::config::GridConfig;
use warren_core::layout::{LevelGraph, Room, RoomKind};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Unicode box-drawing characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// What occupies one tile of the rasterized level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileGlyph {
    /// Nothing placed here.
    #[default]
    Void,
    /// Walkable chamber interior.
    ChamberFloor,
    /// Walkable corridor interior.
    CorridorFloor,
    /// Wall along a top or bottom edge.
    WallHorizontal,
    /// Wall along a left or right edge.
    WallVertical,
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    /// Doorway cut into a wall.
    Door,
}

/// Set of characters used for rendering rasterized tiles.
pub trait GlyphSet: Send + Sync {
    fn glyph(&self, tile: TileGlyph) -> char;
}

/// Classic roguelike ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn glyph(&self, tile: TileGlyph) -> char {
        match tile {
            TileGlyph::Void => ' ',
            TileGlyph::ChamberFloor => '.',
            TileGlyph::CorridorFloor => '#',
            TileGlyph::WallHorizontal
            | TileGlyph::CornerTopLeft
            | TileGlyph::CornerTopRight
            | TileGlyph::CornerBottomLeft
            | TileGlyph::CornerBottomRight => '-',
            TileGlyph::WallVertical => '|',
            TileGlyph::Door => '+',
        }
    }
}

/// Unicode box-drawing glyph set.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn glyph(&self, tile: TileGlyph) -> char {
        match tile {
            TileGlyph::Void => ' ',
            TileGlyph::ChamberFloor => '·',
            TileGlyph::CorridorFloor => '#',
            TileGlyph::WallHorizontal => '─',
            TileGlyph::WallVertical => '│',
            TileGlyph::CornerTopLeft => '┌',
            TileGlyph::CornerTopRight => '┐',
            TileGlyph::CornerBottomLeft => '└',
            TileGlyph::CornerBottomRight => '┘',
            TileGlyph::Door => '+',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            if val.to_uppercase().contains("UTF-8") || val.to_uppercase().contains("UTF8") {
                return true;
            }
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}

/// Rasterize a level graph at one glyph per tile.
///
/// Row 0 is the bottom of the level; callers flipping to screen
/// coordinates iterate rows in reverse. Walls occupy each room's outermost
/// tile ring, and doors replace the wall tile at their joining point.
pub fn rasterize(graph: &LevelGraph, cfg: &GridConfig) -> Vec<Vec<TileGlyph>> {
    let t = cfg.tile_size;
    let width = (graph.area.width / t) as usize;
    let height = (graph.area.height / t) as usize;
    let mut grid = vec![vec![TileGlyph::Void; width]; height];

    for room in &graph.rooms {
        paint_room(&mut grid, room, graph, cfg);
    }

    grid
}

fn paint_room(grid: &mut [Vec<TileGlyph>], room: &Room, graph: &LevelGraph, cfg: &GridConfig) {
    let t = cfg.tile_size;
    let col0 = ((room.left() - graph.area.min_x()) / t) as usize;
    let row0 = ((room.bottom() - graph.area.min_y()) / t) as usize;

    let floor = match room.kind {
        RoomKind::Chamber => TileGlyph::ChamberFloor,
        RoomKind::Corridor(_) => TileGlyph::CorridorFloor,
    };

    for row in 0..room.rows {
        for col in 0..room.cols {
            let left = col == 0;
            let right = col == room.cols - 1;
            let bottom = row == 0;
            let top = row == room.rows - 1;
            let tile = match (left, right, bottom, top) {
                (true, _, true, _) => TileGlyph::CornerBottomLeft,
                (true, _, _, true) => TileGlyph::CornerTopLeft,
                (_, true, true, _) => TileGlyph::CornerBottomRight,
                (_, true, _, true) => TileGlyph::CornerTopRight,
                (true, ..) | (_, true, ..) => TileGlyph::WallVertical,
                (_, _, true, _) | (_, _, _, true) => TileGlyph::WallHorizontal,
                _ => floor,
            };
            grid[row0 + row as usize][col0 + col as usize] = tile;
        }
    }

    let area_col0 = graph.area.min_x() / t;
    let area_row0 = graph.area.min_y() / t;
    for door in &room.doors {
        let (x, y) = room.door_tile(door, cfg);
        grid[(y - area_row0) as usize][(x - area_col0) as usize] = TileGlyph::Door;
    }
}

/// Render a level graph into printable lines, top row first.
pub fn render_lines(graph: &LevelGraph, cfg: &GridConfig, glyphs: &dyn GlyphSet) -> Vec<String> {
    rasterize(graph, cfg)
        .iter()
        .rev()
        .map(|row| row.iter().map(|&tile| glyphs.glyph(tile)).collect())
        .collect()
}
