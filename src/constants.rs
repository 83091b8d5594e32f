// Arena dimensions in cells
pub const ARENA_WIDTH: i16 = 60;
pub const ARENA_HEIGHT: i16 = 24;

// Timing constants
pub const PHYSICS_TICK_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 100;
pub const POLL_INTERVAL_MS: u64 = 16;

// Player tuning
pub const PLAYER_SPEED: f64 = 20.0; // cells per second
pub const PLAYER_HALF: f64 = 0.45;
pub const PLAYER_MAX_HP: u32 = 3;
pub const DAMAGE_GRACE_SECS: f64 = 0.85;
pub const KNOCKBACK_SPEED: f64 = 22.0; // cells per second
pub const KNOCKBACK_DECAY: f64 = 12.0; // fraction lost per second
pub const MOVE_INTENT_TTL_MS: u64 = 180;

// Coins and power-up
pub const COINS_PER_WAVE: usize = 8;
pub const COIN_HALF: f64 = 0.40;
pub const POWERUP_HALF: f64 = 0.40;
pub const SHIELD_SECS: f64 = 5.0;
pub const COIN_PLACEMENT_ATTEMPTS: usize = 100;
pub const POWERUP_PLACEMENT_ATTEMPTS: usize = 200;
pub const SPAWN_MARGIN: f64 = 2.0;

// Hazards
pub const HAZARD_HALF: f64 = 0.45;
pub const HAZARD_SPEEDUP: f64 = 1.15; // per-wave speed multiplier

// Visual feedback timers
pub const POPUP_LIFE_SECS: f64 = 0.8;
pub const POPUP_RISE_SPEED: f64 = 2.0; // cells per second, upward
pub const HIT_FLASH_SECS: f64 = 0.18;
pub const WAVE_CLEAR_PAUSE_SECS: f64 = 2.0;
