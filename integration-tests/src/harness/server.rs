use crate::harness::config::patch_listen;
use crate::harness::{CapturedEvent, init_test_tracing};
use reqwest::blocking::{Client, RequestBuilder};
use secretvm_rest_core::api::AppState;
use secretvm_rest_core::conf::RuntimeConfig;
use secretvm_rest_core::exec::ScriptedRunner;
use secretvm_rest_core::server::build_pingora_server;
use std::net::TcpStream;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

pub const TEST_HOSTNAME: &str = "testvm";

/// Handle to a running server backed by scripted system tools.
pub struct TestServer {
    base_url: String,
    client: Client,
    runner: Arc<ScriptedRunner>,
}

impl TestServer {
    /// Start a server on a free port.
    ///
    /// The listen address in `cfg` is replaced; everything else is used as
    /// given.
    pub fn start(mut cfg: RuntimeConfig, runner: ScriptedRunner) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let listen_port = free_port();
        patch_listen(&mut cfg, listen_port);

        let cfg = Arc::new(cfg);
        let runner = Arc::new(runner);
        let state = Arc::new(AppState::new(cfg.clone(), runner.clone(), TEST_HOSTNAME));

        let server = build_pingora_server(&cfg, state).expect("failed to build server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            runner,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    pub fn runner(&self) -> &ScriptedRunner {
        &self.runner
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Events whose fields include `name = value`, waiting up to a second for the
/// first one to arrive. The logging hook runs after the response is sent.
pub fn wait_for_events(name: &str, value: &str) -> Vec<CapturedEvent> {
    let deadline = Instant::now() + Duration::from_secs(1);
    loop {
        let found: Vec<CapturedEvent> = events()
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.fields.iter().any(|(k, v)| k == name && v == value))
            .cloned()
            .collect();

        if !found.is_empty() || Instant::now() > deadline {
            return found;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
