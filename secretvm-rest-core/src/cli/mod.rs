mod conf;


pub use conf::{ConfigCmd, check, dump, summary};
