pub mod cbuffer;
pub mod compare;
pub mod member;
pub mod structured;

pub use cbuffer::CbufferLayout;
pub use compare::layouts_equivalent;
pub use member::LayoutMember;
pub use structured::StructuredLayout;
