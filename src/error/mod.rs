pub mod diagnostic;

pub use diagnostic::{ErrorKind, HlslError};
