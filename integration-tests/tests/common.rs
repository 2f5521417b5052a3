#![allow(dead_code)]

use secretvm_rest_core::exec::ScriptedRunner;

pub const STARTUP: &str = "secret-vm-startup.service";
pub const BOOTSTRAP: &str = "secret-vm-docker-start.service";

/// A VM whose workload is up: one running container named `web`.
pub fn running_vm() -> ScriptedRunner {
    ScriptedRunner::new()
        .on("systemctl", &["show", "-p", "SubState", "--value", STARTUP], "exited\n")
        .on("systemctl", &["show", "-p", "SubState", "--value", BOOTSTRAP], "running\n")
        .on("docker", &["ps", "-q"], "4f2a9c\n")
        .on("docker", &["ps", "-a"], "web\n")
        .on(
            "journalctl",
            &[],
            "Jan 02 03:04:05.000001 testvm systemd[1]: Started secret-vm-startup.service.\n\
             Jan 02 03:04:07.000001 testvm dockerd[88]: container started\n",
        )
        .on(
            "docker",
            &["logs"],
            "2021-01-02T03:04:06.000001000Z listening on :8080\n",
        )
}
