//! Game simulation: state, spawning, and the update loop.

pub mod logic;
pub mod popups;
pub mod spawn;
pub mod types;
