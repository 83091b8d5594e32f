//! Coin Dash simulation: movement, collisions, damage, and wave progression.

use crate::constants::*;
use crate::game::popups::ScorePopup;
use crate::game::spawn;
use crate::game::types::{base_hazards, boxes_overlap, ArenaGame, GamePhase, Player, Wall};
use crate::input::GameInput;

enum Axis {
    X,
    Y,
}

/// Apply a discrete input event.
pub fn process_input(game: &mut ArenaGame, input: GameInput) {
    match input {
        GameInput::ToggleDebug => {
            game.debug_hitboxes = !game.debug_hitboxes;
        }
        GameInput::Reset => {
            let keep_title = game.phase == GamePhase::Title;
            reset_game(game, keep_title);
        }
        GameInput::Start => match game.phase {
            GamePhase::Title | GamePhase::GameOver => reset_game(game, false),
            GamePhase::WaveClear => start_next_wave(game),
            GamePhase::Playing => {}
        },
        GameInput::Move(dx, dy) => {
            if game.phase != GamePhase::Playing {
                return;
            }
            // Key repeat keeps the intent alive; each axis tracks its own TTL
            // so alternating repeats of two keys read as a diagonal.
            if dx != 0 {
                game.intent_x = dx;
                game.intent_x_ttl_ms = MOVE_INTENT_TTL_MS;
            }
            if dy != 0 {
                game.intent_y = dy;
                game.intent_y_ttl_ms = MOVE_INTENT_TTL_MS;
            }
        }
        GameInput::Quit | GameInput::Other => {}
    }
}

/// Advance the simulation by `dt_ms` of wall-clock time.
///
/// Physics runs in fixed 16 ms steps pulled from an accumulator; `dt_ms` is
/// clamped so a stalled terminal cannot teleport entities. Returns whether
/// any simulation state changed.
pub fn tick(game: &mut ArenaGame, dt_ms: u64) -> bool {
    let dt_ms = dt_ms.min(MAX_TICK_MS);
    let dt_sec = dt_ms as f64 / 1000.0;

    // Popups and the hit flash always animate so they finish fading.
    let had_popups = !game.popups.is_empty();
    game.popups.retain_mut(|p| p.advance(dt_sec));
    if game.hit_flash > 0.0 {
        game.hit_flash = (game.hit_flash - dt_sec).max(0.0);
    }

    match game.phase {
        GamePhase::WaveClear => {
            // Everything freezes while the banner counts down.
            game.wave_clear_timer -= dt_sec;
            if game.wave_clear_timer <= 0.0 {
                start_next_wave(game);
            }
            return true;
        }
        GamePhase::Playing => {}
        GamePhase::Title | GamePhase::GameOver => return had_popups,
    }

    game.accumulated_time_ms += dt_ms;

    let mut changed = had_popups;
    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(game);
        changed = true;

        if game.phase != GamePhase::Playing {
            break;
        }
    }

    changed
}

/// One fixed physics step.
fn step_physics(game: &mut ArenaGame) {
    let dt_sec = PHYSICS_TICK_MS as f64 / 1000.0;

    expire_intents(game);

    // Player velocity: normalized intent plus decaying knockback
    let (mut vx, mut vy) = intent_velocity(game.intent_x, game.intent_y);
    vx += game.player.knock_vx;
    vy += game.player.knock_vy;

    let decay = (1.0 - KNOCKBACK_DECAY * dt_sec).max(0.0);
    game.player.knock_vx *= decay;
    game.player.knock_vy *= decay;
    if game.player.knock_vx.abs() < 0.01 {
        game.player.knock_vx = 0.0;
    }
    if game.player.knock_vy.abs() < 0.01 {
        game.player.knock_vy = 0.0;
    }

    // Axis-separated movement against solid walls
    move_axis(&game.walls, &mut game.player, Axis::X, vx * dt_sec);
    move_axis(&game.walls, &mut game.player, Axis::Y, vy * dt_sec);

    collect_coins(game);
    collect_powerup(game);

    // Hazard contact at current positions, then patrol
    let hit = game
        .hazards
        .iter()
        .find(|h| {
            boxes_overlap(
                game.player.x,
                game.player.y,
                PLAYER_HALF,
                h.x,
                h.y,
                HAZARD_HALF,
            )
        })
        .map(|h| (h.x, h.y));
    if let Some((hx, hy)) = hit {
        apply_damage(game, hx, hy);
    }

    for hazard in &mut game.hazards {
        hazard.advance(dt_sec);
    }
    if let Some(powerup) = &mut game.powerup {
        powerup.bob_time += dt_sec;
    }

    if game.player.invincible_for > 0.0 {
        game.player.invincible_for = (game.player.invincible_for - dt_sec).max(0.0);
    }

    if game.phase == GamePhase::Playing && game.wave_complete() {
        game.phase = GamePhase::WaveClear;
        game.wave_clear_timer = WAVE_CLEAR_PAUSE_SECS;
    }

    game.tick_count += 1;
}

fn expire_intents(game: &mut ArenaGame) {
    game.intent_x_ttl_ms = game.intent_x_ttl_ms.saturating_sub(PHYSICS_TICK_MS);
    game.intent_y_ttl_ms = game.intent_y_ttl_ms.saturating_sub(PHYSICS_TICK_MS);
    if game.intent_x_ttl_ms == 0 {
        game.intent_x = 0;
    }
    if game.intent_y_ttl_ms == 0 {
        game.intent_y = 0;
    }
}

/// Normalize so diagonal movement is no faster than cardinal.
fn intent_velocity(ix: i8, iy: i8) -> (f64, f64) {
    if ix == 0 && iy == 0 {
        return (0.0, 0.0);
    }
    let x = ix as f64;
    let y = iy as f64;
    let len = (x * x + y * y).sqrt();
    (x / len * PLAYER_SPEED, y / len * PLAYER_SPEED)
}

fn move_axis(walls: &[Wall], player: &mut Player, axis: Axis, amount: f64) {
    if amount == 0.0 {
        return;
    }

    match axis {
        Axis::X => player.x += amount,
        Axis::Y => player.y += amount,
    }

    for wall in walls {
        if !wall.overlaps_box(player.x, player.y, PLAYER_HALF) {
            continue;
        }
        match axis {
            Axis::X => {
                if amount > 0.0 {
                    player.x = wall.left() - PLAYER_HALF;
                } else {
                    player.x = wall.right() + PLAYER_HALF;
                }
            }
            Axis::Y => {
                if amount > 0.0 {
                    player.y = wall.top() - PLAYER_HALF;
                } else {
                    player.y = wall.bottom() + PLAYER_HALF;
                }
            }
        }
    }
}

fn collect_coins(game: &mut ArenaGame) {
    let (px, py) = (game.player.x, game.player.y);
    let mut picked = Vec::new();

    game.coins.retain(|coin| {
        if boxes_overlap(px, py, PLAYER_HALF, coin.x, coin.y, COIN_HALF) {
            picked.push(*coin);
            false
        } else {
            true
        }
    });

    for coin in picked {
        game.player.score += 1;
        game.popups.push(ScorePopup::new(coin.x, coin.y));
    }
}

fn collect_powerup(game: &mut ArenaGame) {
    let grabbed = game.powerup.is_some_and(|p| {
        boxes_overlap(
            game.player.x,
            game.player.y,
            PLAYER_HALF,
            p.x,
            p.y,
            POWERUP_HALF,
        )
    });

    if grabbed {
        game.powerup = None;
        // Extends an active shield, never shortens it
        game.player.invincible_for = game.player.invincible_for.max(SHIELD_SECS);
    }
}

fn apply_damage(game: &mut ArenaGame, source_x: f64, source_y: f64) {
    if game.player.is_invincible() {
        return;
    }

    game.player.hp = game.player.hp.saturating_sub(1);
    game.player.invincible_for = DAMAGE_GRACE_SECS;
    game.hit_flash = HIT_FLASH_SECS;

    // Knock the player away from the hazard center
    let mut dx = game.player.x - source_x;
    let mut dy = game.player.y - source_y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f64::EPSILON {
        dx = 1.0;
        dy = 0.0;
    } else {
        dx /= len;
        dy /= len;
    }
    game.player.knock_vx = dx * KNOCKBACK_SPEED;
    game.player.knock_vy = dy * KNOCKBACK_SPEED;

    if game.player.hp == 0 {
        game.phase = GamePhase::GameOver;
    }
}

/// Increment the wave, speed up the hazards in place, respawn the coins.
pub fn start_next_wave(game: &mut ArenaGame) {
    game.wave += 1;
    for hazard in &mut game.hazards {
        hazard.speed *= HAZARD_SPEEDUP;
    }

    let mut rng = spawn::wave_rng(game.wave);
    spawn::scatter_coins(game, &mut rng);
    spawn::place_powerup(game, &mut rng);

    game.wave_clear_timer = 0.0;
    game.phase = GamePhase::Playing;
}

/// Back to wave 1: player re-centered at full strength, hazards at base speed,
/// fresh wave-1 layout. From the title screen the title stays up.
pub fn reset_game(game: &mut ArenaGame, keep_title: bool) {
    game.wave = 1;
    game.wave_clear_timer = 0.0;
    game.hit_flash = 0.0;
    game.player = Player::new();
    game.hazards = base_hazards();
    game.popups.clear();

    game.intent_x = 0;
    game.intent_y = 0;
    game.intent_x_ttl_ms = 0;
    game.intent_y_ttl_ms = 0;
    game.accumulated_time_ms = 0;

    let mut rng = spawn::wave_rng(game.wave);
    spawn::scatter_coins(game, &mut rng);
    spawn::place_powerup(game, &mut rng);

    game.phase = if keep_title {
        GamePhase::Title
    } else {
        GamePhase::Playing
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_game() -> ArenaGame {
        let mut game = ArenaGame::new();
        process_input(&mut game, GameInput::Start);
        game
    }

    #[test]
    fn test_title_ignores_movement() {
        let mut game = ArenaGame::new();
        process_input(&mut game, GameInput::Move(1, 0));
        assert_eq!(game.intent_x, 0);

        let x_before = game.player.x;
        tick(&mut game, 100);
        assert!((game.player.x - x_before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_enters_playing() {
        let mut game = ArenaGame::new();
        assert_eq!(game.phase, GamePhase::Title);
        process_input(&mut game, GameInput::Start);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_move_intent_moves_player() {
        let mut game = playing_game();
        let x_before = game.player.x;

        process_input(&mut game, GameInput::Move(1, 0));
        tick(&mut game, 64);

        assert!(game.player.x > x_before);
    }

    #[test]
    fn test_intent_expires_without_repeat() {
        let mut game = playing_game();
        process_input(&mut game, GameInput::Move(1, 0));
        assert_eq!(game.intent_x, 1);

        let steps = MOVE_INTENT_TTL_MS / PHYSICS_TICK_MS + 2;
        for _ in 0..steps {
            tick(&mut game, PHYSICS_TICK_MS);
        }
        assert_eq!(game.intent_x, 0);
    }

    #[test]
    fn test_diagonal_speed_matches_cardinal() {
        let (vx, vy) = intent_velocity(1, 1);
        let speed = (vx * vx + vy * vy).sqrt();
        assert!((speed - PLAYER_SPEED).abs() < 1e-9);

        let (vx, _) = intent_velocity(1, 0);
        assert!((vx - PLAYER_SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_wall_stops_player() {
        let mut game = playing_game();
        // Just left of the interior wall at x=24
        game.player.x = 23.0;
        game.player.y = 6.0;

        for _ in 0..30 {
            process_input(&mut game, GameInput::Move(1, 0));
            tick(&mut game, PHYSICS_TICK_MS);
        }

        assert!(game.player.x <= 24.0 - PLAYER_HALF + 1e-9);
    }

    #[test]
    fn test_boundary_clamps_player() {
        let mut game = playing_game();
        game.hazards.clear();
        // Keep one far-away coin so the wave never completes mid-test
        game.coins.clear();
        game.coins.push(crate::game::types::Coin { x: 50.0, y: 20.0 });

        for _ in 0..200 {
            process_input(&mut game, GameInput::Move(0, -1));
            tick(&mut game, PHYSICS_TICK_MS);
        }

        // Top boundary ring is one cell tall
        assert!(game.player.y >= 1.0 + PLAYER_HALF - 1e-9);
    }

    #[test]
    fn test_coin_pickup_scores_and_pops() {
        let mut game = playing_game();
        game.coins.clear();
        game.coins.push(crate::game::types::Coin {
            x: game.player.x,
            y: game.player.y,
        });
        game.coins_spawned = 1;

        tick(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.player.score, 1);
        assert!(game.coins.is_empty());
        assert_eq!(game.popups.len(), 1);
    }

    #[test]
    fn test_powerup_grants_shield() {
        let mut game = playing_game();
        game.hazards.clear();
        game.powerup = Some(crate::game::types::PowerUp::new(
            game.player.x,
            game.player.y,
        ));

        tick(&mut game, PHYSICS_TICK_MS);

        assert!(game.powerup.is_none());
        assert!(game.player.invincible_for > SHIELD_SECS - 0.1);
    }

    #[test]
    fn test_shield_not_shortened_by_pickup() {
        let mut game = playing_game();
        game.player.invincible_for = 9.0;
        game.powerup = Some(crate::game::types::PowerUp::new(
            game.player.x,
            game.player.y,
        ));

        tick(&mut game, PHYSICS_TICK_MS);

        assert!(game.player.invincible_for > 8.5);
    }

    #[test]
    fn test_hazard_damage() {
        let mut game = playing_game();
        let hazard_x = game.player.x + 0.2;
        game.hazards[0].x = hazard_x;
        game.hazards[0].y = game.player.y;

        tick(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.player.hp, PLAYER_MAX_HP - 1);
        assert!(game.player.is_invincible());
        assert!(game.hit_flash > 0.0);
        // Knocked away from the hazard
        assert!(game.player.knock_vx < 0.0);
    }

    #[test]
    fn test_damage_at_zero_hp_is_game_over() {
        let mut game = playing_game();
        game.player.hp = 1;
        game.hazards[0].x = game.player.x;
        game.hazards[0].y = game.player.y;

        tick(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.player.hp, 0);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_tick_clamps_large_dt() {
        let mut game = playing_game();
        let before = game.tick_count;

        tick(&mut game, 50_000);

        // Clamped to 100ms => at most 6 fixed steps
        assert!(game.tick_count - before <= 6);
    }

    #[test]
    fn test_popups_keep_fading_on_game_over() {
        let mut game = playing_game();
        game.popups.push(ScorePopup::new(10.0, 10.0));
        game.phase = GamePhase::GameOver;

        tick(&mut game, 100);
        assert_eq!(game.popups.len(), 1);

        for _ in 0..10 {
            tick(&mut game, 100);
        }
        assert!(game.popups.is_empty());
    }

    #[test]
    fn test_debug_toggle() {
        let mut game = ArenaGame::new();
        assert!(!game.debug_hitboxes);
        process_input(&mut game, GameInput::ToggleDebug);
        assert!(game.debug_hitboxes);
        process_input(&mut game, GameInput::ToggleDebug);
        assert!(!game.debug_hitboxes);
    }
}
