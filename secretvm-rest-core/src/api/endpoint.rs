use std::str::FromStr;

/// Routable endpoints. Rendered `.html` variants and `/resources` have
/// entries in the access policy table but no handler here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Status,
    Logs,
    Services,
    CpuAttestation,
    GpuAttestation,
    SelfReport,
    DockerCompose,
    VmUpdates,
}

impl FromStr for Endpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/status" => Ok(Endpoint::Status),
            "/logs" => Ok(Endpoint::Logs),
            "/services" => Ok(Endpoint::Services),
            "/cpu" => Ok(Endpoint::CpuAttestation),
            "/gpu" => Ok(Endpoint::GpuAttestation),
            "/self" => Ok(Endpoint::SelfReport),
            "/docker-compose" => Ok(Endpoint::DockerCompose),
            "/vm_updates" => Ok(Endpoint::VmUpdates),
            _ => Err("unknown endpoint"),
        }
    }
}
