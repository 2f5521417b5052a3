mod files;
mod logs;
mod status;
mod vm_updates;

pub use files::{CPU_REPORT, GPU_REPORT, SELF_REPORT, attestation, docker_compose};
pub use logs::{LogParams, logs, services};
pub use status::status;
pub use vm_updates::vm_updates;
