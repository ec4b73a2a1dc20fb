//! Word pools for puzzle generation
//!
//! An embedded pool for out-of-the-box play plus a file loader for custom
//! lists.

mod embedded;
pub mod loader;

pub use embedded::WORDS;
