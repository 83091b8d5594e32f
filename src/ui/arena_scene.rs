//! Arena scene rendering.

use super::game_common::{
    create_game_layout, render_center_overlay, render_info_panel_frame, render_status_bar,
    render_too_small,
};
use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, COIN_HALF, HAZARD_HALF, PLAYER_HALF, POWERUP_HALF};
use crate::game::types::{ArenaGame, GamePhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MIN_WIDTH: u16 = 86;
const MIN_HEIGHT: u16 = 28;

const WALL_COLOR: Color = Color::Rgb(76, 86, 106);
const FLOOR_COLOR: Color = Color::Rgb(40, 44, 52);

/// Render the whole game screen: arena, status bar, info panel, overlays.
pub fn render_arena_scene(frame: &mut Frame, area: Rect, game: &ArenaGame) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // The border doubles as the damage flash
    let border_color = if game.hit_flash > 0.0 {
        Color::Red
    } else {
        Color::Yellow
    };

    let layout = create_game_layout(
        frame,
        area,
        " Coin Dash ",
        border_color,
        ARENA_HEIGHT as u16,
        24,
    );

    let origin = render_board(frame, layout.content, game);
    if let Some(origin) = origin {
        render_popups(frame, layout.content, origin, game);
    }

    match game.phase {
        GamePhase::Title => render_title_overlay(frame, layout.content),
        GamePhase::WaveClear => render_wave_clear_overlay(frame, layout.content, game),
        GamePhase::GameOver => render_game_over_overlay(frame, layout.content, game),
        GamePhase::Playing => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the arena grid centered in `area`. Returns the top-left screen cell
/// of the grid, or `None` if the area is unusably small.
fn render_board(frame: &mut Frame, area: Rect, game: &ArenaGame) -> Option<(u16, u16)> {
    let grid_w = ARENA_WIDTH as u16;
    let grid_h = ARENA_HEIGHT as u16;

    let visible_w = grid_w.min(area.width);
    let visible_h = grid_h.min(area.height);
    if visible_w < 10 || visible_h < 10 {
        return None;
    }

    let x_off = area.x + (area.width.saturating_sub(visible_w)) / 2;
    let y_off = area.y + (area.height.saturating_sub(visible_h)) / 2;

    for y in 0..visible_h {
        let mut spans = Vec::with_capacity(visible_w as usize);
        for x in 0..visible_w {
            let (glyph, style) = cell_style(game, x as i16, y as i16);
            spans.push(Span::styled(glyph, style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off + y, visible_w, 1),
        );
    }

    Some((x_off, y_off))
}

/// True if the cell square overlaps the hitbox centered at (x, y).
fn cell_in_box(cx: i16, cy: i16, x: f64, y: f64, half: f64) -> bool {
    (cx as f64) < x + half
        && (cx + 1) as f64 > x - half
        && (cy as f64) < y + half
        && (cy + 1) as f64 > y - half
}

fn cell_style(game: &ArenaGame, cx: i16, cy: i16) -> (&'static str, Style) {
    let (glyph, mut style) = base_cell_style(game, cx, cy);

    // Collisions use the hitbox cells, not the glyphs; mark them when debugging
    if game.debug_hitboxes && cell_in_any_hitbox(game, cx, cy) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    (glyph, style)
}

fn cell_in_any_hitbox(game: &ArenaGame, cx: i16, cy: i16) -> bool {
    if cell_in_box(cx, cy, game.player.x, game.player.y, PLAYER_HALF) {
        return true;
    }
    if game
        .hazards
        .iter()
        .any(|h| cell_in_box(cx, cy, h.x, h.y, HAZARD_HALF))
    {
        return true;
    }
    if game
        .coins
        .iter()
        .any(|c| cell_in_box(cx, cy, c.x, c.y, COIN_HALF))
    {
        return true;
    }
    if let Some(p) = &game.powerup {
        if cell_in_box(cx, cy, p.x, p.y, POWERUP_HALF) {
            return true;
        }
    }
    false
}

fn base_cell_style(game: &ArenaGame, cx: i16, cy: i16) -> (&'static str, Style) {
    let at_cell = |x: f64, y: f64| x.floor() as i16 == cx && y.floor() as i16 == cy;

    if at_cell(game.player.x, game.player.y) {
        // Blink while the shield is up
        let color = if game.player.is_invincible() && (game.player.invincible_for * 16.0) as i64 % 2 == 0
        {
            Color::White
        } else {
            Color::Cyan
        };
        return ("@", Style::default().fg(color).add_modifier(Modifier::BOLD));
    }

    if game.hazards.iter().any(|h| at_cell(h.x, h.y)) {
        return (
            "▲",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        );
    }

    if let Some(powerup) = &game.powerup {
        if at_cell(powerup.x, powerup.y) {
            let glyph = if (powerup.bob_time * 4.0).sin() >= 0.0 {
                "◆"
            } else {
                "◇"
            };
            return (
                glyph,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    if game.coins.iter().any(|c| at_cell(c.x, c.y)) {
        return ("●", Style::default().fg(Color::Yellow));
    }

    if game.walls.iter().any(|w| w.contains_cell(cx, cy)) {
        return ("█", Style::default().fg(WALL_COLOR));
    }

    ("·", Style::default().fg(FLOOR_COLOR))
}

fn render_popups(frame: &mut Frame, area: Rect, origin: (u16, u16), game: &ArenaGame) {
    let (x_off, y_off) = origin;

    for popup in &game.popups {
        let cx = popup.x.floor();
        let cy = popup.y.floor();
        if cx < 0.0 || cy < 0.0 {
            continue;
        }

        let sx = x_off + cx as u16;
        let sy = y_off + cy as u16;
        if sx + 2 > area.x + area.width || sy >= area.y + area.height {
            continue;
        }

        let style = if popup.fade() > 0.5 {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("+1", style))),
            Rect::new(sx, sy, 2, 1),
        );
    }
}

fn render_title_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "COIN DASH",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Collect every coin, dodge the hazards.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Grab ◆ for a 5 second shield.",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press Space to start]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_center_overlay(frame, area, Color::Yellow, lines);
}

fn render_wave_clear_overlay(frame: &mut Frame, area: Rect, game: &ArenaGame) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Wave {} complete!", game.wave),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", game.player.score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Hazards are getting faster...",
            Style::default().fg(Color::LightRed),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space to continue]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_center_overlay(frame, area, Color::Green, lines);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, game: &ArenaGame) {
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score {} - reached wave {}", game.player.score, game.wave),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Restart  [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_center_overlay(frame, area, Color::Red, lines);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &ArenaGame) {
    match game.phase {
        GamePhase::Title => render_status_bar(
            frame,
            area,
            "Ready to dash",
            Color::Yellow,
            &[("[Space]", "Start"), ("[Esc]", "Quit")],
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            &format!(
                "Wave {} - {} of {} coins",
                game.wave,
                game.coins_collected(),
                game.coins_spawned
            ),
            Color::LightYellow,
            &[
                ("[WASD/Arrows]", "Move"),
                ("[F1]", "Hitboxes"),
                ("[R]", "Reset"),
                ("[Esc]", "Quit"),
            ],
        ),
        GamePhase::WaveClear => render_status_bar(
            frame,
            area,
            "Wave cleared!",
            Color::Green,
            &[("[Space]", "Continue"), ("[Esc]", "Quit")],
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "Down and out",
            Color::Red,
            &[("[Space]", "Restart"), ("[R]", "Reset"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ArenaGame) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let inner = render_info_panel_frame(frame, area);

    let hp = game.player.hp as usize;
    let missing = (crate::constants::PLAYER_MAX_HP as usize).saturating_sub(hp);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.player.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("HP:    ", Style::default().fg(Color::DarkGray)),
            Span::styled("♥".repeat(hp), Style::default().fg(Color::LightRed)),
            Span::styled("♥".repeat(missing), Style::default().fg(FLOOR_COLOR)),
        ]),
        Line::from(vec![
            Span::styled("Wave:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.wave.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    if game.player.is_invincible() {
        lines.push(Line::from(vec![
            Span::styled("Shield: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}s", game.player.invincible_for),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(" @ ", Style::default().fg(Color::Cyan)),
        Span::styled("You", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" ● ", Style::default().fg(Color::Yellow)),
        Span::styled("Coin", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" ▲ ", Style::default().fg(Color::LightRed)),
        Span::styled("Hazard", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(Color::Green)),
        Span::styled("Shield", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" █ ", Style::default().fg(WALL_COLOR)),
        Span::styled("Wall", Style::default().fg(Color::DarkGray)),
    ]));

    if game.debug_hitboxes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "DEBUG: hitbox cells",
            Style::default().fg(Color::LightCyan),
        )));
        lines.push(Line::from(Span::styled(
            "shown reversed",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
