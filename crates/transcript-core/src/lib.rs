//! transcript-core - Core types and content normalization for session transcripts
//!
//! This crate decodes Claude Code session logs (JSONL) into records and
//! flattens their heterogeneous message content into plain display text.

pub mod types;
pub mod literal;
pub mod normalize;
pub mod parser;
pub mod extract;
pub mod render;

pub use types::*;
pub use literal::*;
pub use normalize::*;
pub use parser::*;
pub use extract::*;
