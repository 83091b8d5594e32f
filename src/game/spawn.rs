//! Coin and power-up placement.
//!
//! Placement is rejection-sampled so nothing lands inside a wall, on another
//! collectible, or on top of the player. Each wave seeds its own RNG, so a
//! given wave always produces the same layout.

use crate::constants::*;
use crate::game::types::{boxes_overlap, ArenaGame, Coin, PowerUp, Wall};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for a wave's layout.
pub fn wave_rng(wave: u32) -> StdRng {
    StdRng::seed_from_u64(wave as u64 * 7 + 4)
}

fn spot_hits_wall(walls: &[Wall], x: f64, y: f64, half: f64) -> bool {
    walls.iter().any(|w| w.overlaps_box(x, y, half))
}

fn random_spot<R: Rng>(rng: &mut R) -> (f64, f64) {
    let x = rng.gen_range(SPAWN_MARGIN..(ARENA_WIDTH as f64 - SPAWN_MARGIN));
    let y = rng.gen_range(SPAWN_MARGIN..(ARENA_HEIGHT as f64 - SPAWN_MARGIN));
    (x, y)
}

/// Drop a fresh set of coins for the current wave.
pub fn scatter_coins<R: Rng>(game: &mut ArenaGame, rng: &mut R) {
    game.coins.clear();

    for _ in 0..COINS_PER_WAVE {
        for _ in 0..COIN_PLACEMENT_ATTEMPTS {
            let (x, y) = random_spot(rng);

            if spot_hits_wall(&game.walls, x, y, COIN_HALF) {
                continue;
            }
            if game
                .coins
                .iter()
                .any(|c| boxes_overlap(x, y, COIN_HALF, c.x, c.y, COIN_HALF))
            {
                continue;
            }
            if boxes_overlap(x, y, COIN_HALF, game.player.x, game.player.y, PLAYER_HALF) {
                continue;
            }

            game.coins.push(Coin { x, y });
            break;
        }
    }

    game.coins_spawned = game.coins.len() as u32;
}

/// Place the single invincibility power-up, clear of walls, coins, and the player.
pub fn place_powerup<R: Rng>(game: &mut ArenaGame, rng: &mut R) {
    game.powerup = None;

    for _ in 0..POWERUP_PLACEMENT_ATTEMPTS {
        let (x, y) = random_spot(rng);

        if spot_hits_wall(&game.walls, x, y, POWERUP_HALF) {
            continue;
        }
        if game
            .coins
            .iter()
            .any(|c| boxes_overlap(x, y, POWERUP_HALF, c.x, c.y, COIN_HALF))
        {
            continue;
        }
        if boxes_overlap(x, y, POWERUP_HALF, game.player.x, game.player.y, PLAYER_HALF) {
            continue;
        }

        game.powerup = Some(PowerUp::new(x, y));
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_places_full_coin_set() {
        let mut game = ArenaGame::new();
        let mut rng = wave_rng(3);
        scatter_coins(&mut game, &mut rng);

        assert_eq!(game.coins.len(), COINS_PER_WAVE);
        assert_eq!(game.coins_spawned, COINS_PER_WAVE as u32);
    }

    #[test]
    fn test_coins_avoid_walls_and_player() {
        let mut game = ArenaGame::new();
        for wave in 1..=10 {
            let mut rng = wave_rng(wave);
            scatter_coins(&mut game, &mut rng);

            for coin in &game.coins {
                assert!(
                    !spot_hits_wall(&game.walls, coin.x, coin.y, COIN_HALF),
                    "wave {} coin inside a wall at ({:.1}, {:.1})",
                    wave,
                    coin.x,
                    coin.y
                );
                assert!(!boxes_overlap(
                    coin.x,
                    coin.y,
                    COIN_HALF,
                    game.player.x,
                    game.player.y,
                    PLAYER_HALF
                ));
            }
        }
    }

    #[test]
    fn test_coins_do_not_overlap_each_other() {
        let mut game = ArenaGame::new();
        let mut rng = wave_rng(2);
        scatter_coins(&mut game, &mut rng);

        for (i, a) in game.coins.iter().enumerate() {
            for b in game.coins.iter().skip(i + 1) {
                assert!(!boxes_overlap(a.x, a.y, COIN_HALF, b.x, b.y, COIN_HALF));
            }
        }
    }

    #[test]
    fn test_same_wave_same_layout() {
        let mut a = ArenaGame::new();
        let mut b = ArenaGame::new();

        scatter_coins(&mut a, &mut wave_rng(5));
        scatter_coins(&mut b, &mut wave_rng(5));

        assert_eq!(a.coins, b.coins);
    }

    #[test]
    fn test_different_waves_differ() {
        let mut a = ArenaGame::new();
        let mut b = ArenaGame::new();

        scatter_coins(&mut a, &mut wave_rng(1));
        scatter_coins(&mut b, &mut wave_rng(2));

        assert_ne!(a.coins, b.coins);
    }

    #[test]
    fn test_powerup_avoids_coins() {
        let mut game = ArenaGame::new();
        let mut rng = wave_rng(4);
        scatter_coins(&mut game, &mut rng);
        place_powerup(&mut game, &mut rng);

        let powerup = game.powerup.expect("power-up should find a spot");
        assert!(!spot_hits_wall(&game.walls, powerup.x, powerup.y, POWERUP_HALF));
        for coin in &game.coins {
            assert!(!boxes_overlap(
                powerup.x,
                powerup.y,
                POWERUP_HALF,
                coin.x,
                coin.y,
                COIN_HALF
            ));
        }
    }
}
