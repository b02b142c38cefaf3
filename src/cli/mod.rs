pub mod analyzer;
pub mod args;
pub mod error_display;
pub mod output;
pub mod report;

pub use analyzer::*;
pub use args::*;
pub use error_display::*;
pub use output::*;
pub use report::*;
