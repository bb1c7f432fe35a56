//! Dungeon layout viewer
//!
//! Generates a level and browses it in the terminal.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use warren_core::config::GridConfig;
use warren_core::layout::generate;
use warren_tui::display::detect_glyph_set;
use warren_tui::{App, GraphicsMode};

/// Procedural dungeon layout viewer
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "Generate and browse dungeon layouts", long_about = None)]
struct Args {
    /// Number of rooms to place
    #[arg(short = 'n', long = "rooms", default_value_t = 20)]
    rooms: usize,

    /// Seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the layout as JSON and exit
    #[arg(long = "dump")]
    dump: bool,

    /// Glyphs to render with
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let cfg = GridConfig::default();
    let graph = match generate(args.rooms, &cfg, args.seed) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("warren: {err}");
            std::process::exit(1);
        }
    };

    // Dump mode writes the layout to stdout and never touches the terminal
    if args.dump {
        let json = serde_json::to_string_pretty(&graph).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(graph, cfg, args.rooms, detect_glyph_set(args.graphics));

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
