//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use warren_core::layout::LevelGraph;

/// Widget for rendering the status lines under the map
pub struct StatusWidget<'a> {
    graph: &'a LevelGraph,
    error: Option<&'a str>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(graph: &'a LevelGraph, error: Option<&'a str>) -> Self {
        Self { graph, error }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let g = self.graph;

        let line1 = format!(
            "seed:{} rooms:{} corridors:{} doors:{}",
            g.seed,
            g.chambers().count(),
            g.corridors().count(),
            g.connection_count(),
        );
        let line2 = match self.error {
            Some(err) => format!("error: {}", err),
            None => "r: new layout   q: quit".to_string(),
        };

        let style = Style::default().fg(Color::White);
        buf.set_string(area.x, area.y, &line1, style);
        if area.height > 1 {
            let style2 = if self.error.is_some() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            buf.set_string(area.x, area.y + 1, &line2, style2);
        }
    }
}
