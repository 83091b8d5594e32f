//! Floating "+1" markers shown when a coin is picked up.

use crate::constants::{POPUP_LIFE_SECS, POPUP_RISE_SPEED};

/// A transient score marker that rises and fades after a pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePopup {
    pub x: f64,
    pub y: f64,
    pub age: f64,
}

impl ScorePopup {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, age: 0.0 }
    }

    /// Advance the popup by `dt_sec`. Returns `false` once expired.
    pub fn advance(&mut self, dt_sec: f64) -> bool {
        self.age += dt_sec;
        self.y -= POPUP_RISE_SPEED * dt_sec;
        self.age < POPUP_LIFE_SECS
    }

    /// Remaining visibility, 1.0 (fresh) down to 0.0 (expired).
    pub fn fade(&self) -> f64 {
        (1.0 - self.age / POPUP_LIFE_SECS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_rises() {
        let mut popup = ScorePopup::new(10.0, 10.0);
        assert!(popup.advance(0.1));
        assert!(popup.y < 10.0);
        assert!((popup.x - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_popup_expires_after_lifetime() {
        let mut popup = ScorePopup::new(5.0, 5.0);
        assert!(popup.advance(POPUP_LIFE_SECS / 2.0));
        assert!(!popup.advance(POPUP_LIFE_SECS));
    }

    #[test]
    fn test_fade_decreases_monotonically() {
        let mut popup = ScorePopup::new(0.0, 0.0);
        let f0 = popup.fade();
        popup.advance(0.2);
        let f1 = popup.fade();
        popup.advance(0.2);
        let f2 = popup.fade();
        assert!(f0 > f1 && f1 > f2);
        assert!((f0 - 1.0).abs() < f64::EPSILON);
    }
}
