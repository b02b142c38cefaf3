pub mod builtin;
pub mod composite;
pub mod ty;

pub use builtin::*;
pub use composite::*;
pub use ty::*;
