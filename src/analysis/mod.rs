//! Comparison and feedback analysis
//!
//! Read-only views over word pairs and game states: letter feedback,
//! similarity and efficiency scores, move suggestions and a composed
//! report. Nothing here mutates a state, and none of these functions can
//! fail; heuristics return best-effort values or no suggestion at all.

mod letters;
mod report;
mod score;
mod suggest;

pub use letters::analyze_letters;
pub use report::analyze_game_state;
pub use score::{calculate_similarity, evaluate_efficiency, is_expert_solution};
pub use suggest::suggest_move;
