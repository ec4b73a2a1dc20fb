//! Word Morph
//!
//! A word-transformation puzzle engine: turn a starting word into a target
//! word with delete, move and exchange operations, each at unit cost. The
//! engine is a pure transformation library built on immutable values, with
//! Wordle-style letter feedback, similarity scoring and move suggestions
//! layered on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmorph::engine::{check_win, create_game, exchange_letter};
//!
//! let state = create_game("hell", "bell");
//! let state = exchange_letter(&state, 0, 'b').unwrap();
//!
//! assert!(check_win(&state));
//! assert_eq!(state.total_cost(), 1);
//! ```

// Core domain types
pub mod core;

// Transformation engine and cost model
pub mod engine;

// Feedback, scoring and suggestions
pub mod analysis;

// Game state persistence
pub mod storage;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
