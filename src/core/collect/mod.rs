//! Declaration collection from parsed modules.

pub mod declarations;

pub use declarations::DeclarationCollector;
