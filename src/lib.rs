pub mod analysis;
pub mod cli;
pub mod core;
pub mod error;
pub mod frontend;
pub mod layout;

#[cfg(test)]
mod tests;
