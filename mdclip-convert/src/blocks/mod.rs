//! Block-level conversion stages
//!
//! Each stage transforms one block construct into HTML, operating on the
//! output of the previous stage. The pipeline order in lib.rs is a correctness
//! contract: later stages assume earlier ones already consumed their syntax.

pub mod code;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod quote;
pub mod rule;
pub mod table;
