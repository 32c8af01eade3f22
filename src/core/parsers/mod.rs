//! Source parsers.
//!
//! - `typescript`: TS/TSX source file parser (uses swc for AST generation)

pub mod typescript;
