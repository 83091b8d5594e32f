pub mod arena_scene;
pub mod game_common;

use crate::game::types::ArenaGame;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &ArenaGame) {
    let area = frame.size();
    arena_scene::render_arena_scene(frame, area, game);
}
