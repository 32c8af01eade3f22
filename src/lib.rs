//! doccov - TSDoc coverage checker for TypeScript projects
//!
//! doccov scans `.ts` and `.tsx` files, finds top-level functions and
//! function-valued variables, and reports how many of them carry a valid
//! TSDoc comment.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, table output)
//! - `config`: File selection settings
//! - `core`: Analysis pipeline (scan, parse, collect, tally, aggregate)

pub mod cli;
pub mod config;
pub mod core;
