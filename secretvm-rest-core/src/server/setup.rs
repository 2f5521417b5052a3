use crate::api::{AppState, DiagnosticGateway};
use crate::conf::RuntimeConfig;
use crate::exec::{CommandRunner, SystemCommandRunner};
use anyhow::{Context, Error, Result, anyhow};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration. Blocks forever.
pub fn run(config: RuntimeConfig) -> Result<()> {
    let config = Arc::new(config);
    let runner = SystemCommandRunner::new(config.exec.timeout);
    let exec_timeout_ms = runner.timeout().as_millis() as u64;
    let state = Arc::new(build_app_state(config.clone(), Arc::new(runner)));

    let server = build_pingora_server(&config, state)?;

    tracing::info!(
        listen = %config.server.listen,
        tls = config.server.tls.is_some(),
        secure_mode = config.server.secure_mode,
        private_mode = config.access.private_mode,
        endpoint_mask = %config.access.policy.to_mask(),
        exec_timeout_ms,
        "secretvm-rest starting"
    );

    server.run_forever();
}

pub fn build_app_state(config: Arc<RuntimeConfig>, runner: Arc<dyn CommandRunner>) -> AppState {
    AppState::new(config, runner, local_hostname())
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &RuntimeConfig, state: Arc<AppState>) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf =
            ServerConf::new().ok_or_else(|| anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = DiagnosticGateway::new(state);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    if let Some(tls) = &config.server.tls {
        let cert = tls.cert.to_string_lossy();
        let key = tls.key.to_string_lossy();
        svc.add_tls(&config.server.listen, &cert, &key)
            .with_context(|| format!("failed to enable TLS on {}", config.server.listen))?;
    } else {
        svc.add_tcp(&config.server.listen);
    }

    server.add_service(svc);

    Ok(server)
}

/// Host name shown in rendered container log lines.
pub fn local_hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "gethostname failed; using 'localhost'");
            "localhost".to_owned()
        }
    }
}
