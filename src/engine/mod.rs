//! Transformation engine
//!
//! Pure word edits, the cost model and the state-transition layer. Every
//! function here maps input values to new output values; nothing blocks,
//! nothing is shared, so any state can be read concurrently and transitions
//! can run on any thread.

pub mod cost;
pub mod transform;

mod error;
mod game;

pub use error::EngineError;
pub use game::{
    calculate_cost, check_win, create_game, delete_letter, exchange_letter, is_valid_move,
    move_letter,
};
