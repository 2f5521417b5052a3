pub mod commands;
mod error;
mod runner;
mod scripted;

#[cfg(test)]
mod tests;

pub use error::*;
pub use runner::*;
pub use scripted::*;
