mod error;
mod probe;
mod state;


pub use error::*;
pub use probe::*;
pub use state::*;
