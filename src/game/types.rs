//! Coin Dash data structures.
//!
//! A real-time arcade game where the player collects coins in a walled arena
//! while dodging patrolling hazards across escalating waves.

use crate::constants::*;
use crate::game::popups::ScorePopup;
use crate::game::spawn;

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Title,
    Playing,
    WaveClear,
    GameOver,
}

/// Solid wall rectangle in whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
}

impl Wall {
    pub fn left(&self) -> f64 {
        self.x as f64
    }

    pub fn right(&self) -> f64 {
        (self.x + self.w) as f64
    }

    pub fn top(&self) -> f64 {
        self.y as f64
    }

    pub fn bottom(&self) -> f64 {
        (self.y + self.h) as f64
    }

    pub fn contains_cell(&self, cx: i16, cy: i16) -> bool {
        cx >= self.x && cx < self.x + self.w && cy >= self.y && cy < self.y + self.h
    }

    /// AABB overlap against a square hitbox centered at (x, y).
    pub fn overlaps_box(&self, x: f64, y: f64, half: f64) -> bool {
        x + half > self.left() && x - half < self.right() && y + half > self.top() && y - half < self.bottom()
    }
}

/// AABB overlap between two square hitboxes.
pub fn boxes_overlap(ax: f64, ay: f64, a_half: f64, bx: f64, by: f64, b_half: f64) -> bool {
    (ax - bx).abs() < a_half + b_half && (ay - by).abs() < a_half + b_half
}

/// Player avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub hp: u32,
    pub score: u32,
    /// Seconds of shield remaining (power-up or post-hit grace).
    pub invincible_for: f64,
    /// Decaying knockback velocity from the last hazard hit.
    pub knock_vx: f64,
    pub knock_vy: f64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: ARENA_WIDTH as f64 / 2.0,
            y: ARENA_HEIGHT as f64 / 2.0,
            hp: PLAYER_MAX_HP,
            score: 0,
            invincible_for: 0.0,
            knock_vx: 0.0,
            knock_vy: 0.0,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_for > 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Collectible coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub x: f64,
    pub y: f64,
}

/// Collectible that grants temporary invincibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub x: f64,
    pub y: f64,
    /// Drives the pulse animation.
    pub bob_time: f64,
}

impl PowerUp {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, bob_time: 0.0 }
    }
}

/// Horizontally patrolling hazard. Touching it costs a hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub x: f64,
    pub y: f64,
    pub home_x: f64,
    /// Patrol half-range around `home_x`.
    pub patrol_dx: f64,
    /// Cells per second. Scales up each wave.
    pub speed: f64,
    /// +1.0 or -1.0.
    pub direction: f64,
}

impl Hazard {
    pub fn new(x: f64, y: f64, patrol_dx: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            home_x: x,
            patrol_dx,
            speed,
            direction: 1.0,
        }
    }

    /// Patrol step: bounce at the extents of the home range.
    pub fn advance(&mut self, dt_sec: f64) {
        let mut x = self.x + self.direction * self.speed * dt_sec;
        if x < self.home_x - self.patrol_dx {
            x = self.home_x - self.patrol_dx;
            self.direction = 1.0;
        } else if x > self.home_x + self.patrol_dx {
            x = self.home_x + self.patrol_dx;
            self.direction = -1.0;
        }
        self.x = x;
    }
}

/// Boundary ring plus interior walls.
pub fn arena_walls() -> Vec<Wall> {
    vec![
        // Boundary
        Wall { x: 0, y: 0, w: ARENA_WIDTH, h: 1 },
        Wall { x: 0, y: ARENA_HEIGHT - 1, w: ARENA_WIDTH, h: 1 },
        Wall { x: 0, y: 0, w: 1, h: ARENA_HEIGHT },
        Wall { x: ARENA_WIDTH - 1, y: 0, w: 1, h: ARENA_HEIGHT },
        // Interior
        Wall { x: 8, y: 5, w: 1, h: 14 },
        Wall { x: 24, y: 2, w: 1, h: 12 },
        Wall { x: 35, y: 11, w: 15, h: 1 },
    ]
}

/// The two patrollers at their wave-1 positions and speeds.
pub fn base_hazards() -> Vec<Hazard> {
    vec![
        Hazard::new(41.0, 8.5, 9.0, 11.0),
        Hazard::new(21.0, 18.0, 7.0, 13.5),
    ]
}

/// Main game state. UI-agnostic; advanced by `logic::process_input` and
/// `logic::tick`.
#[derive(Debug, Clone)]
pub struct ArenaGame {
    pub phase: GamePhase,
    pub debug_hitboxes: bool,

    pub wave: u32,
    pub wave_clear_timer: f64,
    /// Border flash after taking damage.
    pub hit_flash: f64,

    pub walls: Vec<Wall>,
    pub coins: Vec<Coin>,
    /// Coins placed at the start of the current wave.
    pub coins_spawned: u32,
    pub powerup: Option<PowerUp>,
    pub hazards: Vec<Hazard>,
    pub popups: Vec<ScorePopup>,
    pub player: Player,

    // Movement intent, kept alive by key repeat (terminals have no key-state
    // polling). One TTL per axis so alternating repeats give diagonals.
    pub intent_x: i8,
    pub intent_y: i8,
    pub intent_x_ttl_ms: u64,
    pub intent_y_ttl_ms: u64,

    // Timing
    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl ArenaGame {
    /// Create a new game on the title screen with the wave-1 layout placed.
    pub fn new() -> Self {
        let mut game = Self {
            phase: GamePhase::Title,
            debug_hitboxes: false,

            wave: 1,
            wave_clear_timer: 0.0,
            hit_flash: 0.0,

            walls: arena_walls(),
            coins: Vec::new(),
            coins_spawned: 0,
            powerup: None,
            hazards: base_hazards(),
            popups: Vec::new(),
            player: Player::new(),

            intent_x: 0,
            intent_y: 0,
            intent_x_ttl_ms: 0,
            intent_y_ttl_ms: 0,

            accumulated_time_ms: 0,
            tick_count: 0,
        };

        let mut rng = spawn::wave_rng(game.wave);
        spawn::scatter_coins(&mut game, &mut rng);
        spawn::place_powerup(&mut game, &mut rng);
        game
    }

    /// Coins collected so far this wave.
    pub fn coins_collected(&self) -> u32 {
        self.coins_spawned - self.coins.len() as u32
    }

    /// The wave is complete exactly when every spawned coin was collected.
    pub fn wave_complete(&self) -> bool {
        self.coins_collected() == self.coins_spawned
    }
}

impl Default for ArenaGame {
    fn default() -> Self {
        Self::new()
    }
}
