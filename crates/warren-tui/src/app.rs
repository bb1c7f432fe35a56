//! Application state and main UI controller

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use warren_core::config::GridConfig;
use warren_core::layout::{generate, LevelGraph};

use crate::display::GlyphSet;
use crate::widgets::{LevelWidget, StatusWidget};

/// Application state
pub struct App {
    /// Level on screen
    graph: LevelGraph,

    /// Grid the generator runs on
    cfg: GridConfig,

    /// Rooms per regeneration
    rooms: usize,

    /// Glyph set for rendering map tiles
    glyph_set: Box<dyn GlyphSet>,

    /// Failure from the last regeneration, shown in the status line
    last_error: Option<String>,

    /// Should quit
    should_quit: bool,
}

impl App {
    /// Create the viewer around an already generated level
    pub fn new(
        graph: LevelGraph,
        cfg: GridConfig,
        rooms: usize,
        glyph_set: Box<dyn GlyphSet>,
    ) -> Self {
        Self {
            graph,
            cfg,
            rooms,
            glyph_set,
            last_error: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn graph(&self) -> &LevelGraph {
        &self.graph
    }

    /// Replace the level with a fresh entropy-seeded one
    ///
    /// A failed run keeps the current level on screen and surfaces the
    /// error in the status line.
    pub fn regenerate(&mut self) {
        match generate(self.rooms, &self.cfg, None) {
            Ok(graph) => {
                self.graph = graph;
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') => self.regenerate(),
                _ => {}
            }
        }
    }

    /// Render the whole screen
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(frame.area());

        frame.render_widget(
            LevelWidget::new(&self.graph, &self.cfg, self.glyph_set.as_ref()),
            chunks[0],
        );
        frame.render_widget(
            StatusWidget::new(&self.graph, self.last_error.as_deref()),
            chunks[1],
        );
    }
}
