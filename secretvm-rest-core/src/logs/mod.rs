mod error;
mod line;
mod merge;
mod parse;
mod query;
mod render;
mod selector;
mod timestamp;

#[cfg(test)]
mod tests;

pub use error::*;
pub use line::*;
pub use merge::*;
pub use parse::*;
pub use query::*;
pub use render::*;
pub use selector::*;
pub use timestamp::*;
