mod setup;

pub use setup::{build_app_state, build_pingora_server, local_hostname, run};
