pub mod access;
pub mod api;
pub mod cli;
pub mod conf;
pub mod exec;
pub mod logging;
pub mod logs;
pub mod server;
pub mod status;
