mod build_info;
mod constants;
mod game;
mod input;
mod ui;

use constants::POLL_INTERVAL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{process_input, tick};
use game::types::ArenaGame;
use input::GameInput;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "coindash {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Coin Dash - Terminal Arena Arcade Game\n");
                println!("Usage: coindash\n");
                println!("Controls:");
                println!("  WASD/Arrows  Move");
                println!("  Space        Start / continue");
                println!("  F1           Toggle hitbox overlay");
                println!("  R            Reset to wave 1");
                println!("  Esc          Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'coindash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut game = ArenaGame::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        if event::poll(std::time::Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let action = input::map_key(key_event.code);
                if action == GameInput::Quit {
                    break;
                }
                process_input(&mut game, action);
            }
        }

        let elapsed_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        tick(&mut game, elapsed_ms);
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
