pub mod decl;
pub mod parser;
pub mod ty;

pub use parser::Parser;
