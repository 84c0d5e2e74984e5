//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one canned response and counts the requests it
//! has seen so tests can assert that no network call was made. The response
//! may carry a `Location`, be delayed, or declare more bytes than it sends.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub status: u16,
    pub reason: &'static str,
    pub body: Vec<u8>,
    /// Sleep this long after reading the request, before writing anything.
    pub delay: Option<Duration>,
    /// Sent as the `Location` header (for redirects).
    pub location: Option<String>,
    /// Overrides `Content-Length`; a value above `body.len()` makes the
    /// connection close mid-body.
    pub declared_length: Option<usize>,
}

impl ServerOptions {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.into(),
            delay: None,
            location: None,
            declared_length: None,
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct TestServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Base URL with trailing slash, e.g. `http://127.0.0.1:12345/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

pub fn start(opts: ServerOptions) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let paths = Arc::new(Mutex::new(Vec::new()));
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    {
        let hits = Arc::clone(&hits);
        let paths = Arc::clone(&paths);
        let user_agents = Arc::clone(&user_agents);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let opts = Arc::clone(&opts);
                let hits = Arc::clone(&hits);
                let paths = Arc::clone(&paths);
                let user_agents = Arc::clone(&user_agents);
                thread::spawn(move || handle(stream, &opts, &hits, &paths, &user_agents));
            }
        });
    }
    TestServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
        paths,
        user_agents,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &ServerOptions,
    hits: &AtomicUsize,
    paths: &Mutex<Vec<String>>,
    user_agents: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    hits.fetch_add(1, Ordering::SeqCst);
    let (path, user_agent) = parse_request(request);
    paths.lock().unwrap().push(path.to_string());
    if let Some(ua) = user_agent {
        user_agents.lock().unwrap().push(ua.to_string());
    }

    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }

    let location = opts
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        opts.reason,
        opts.declared_length.unwrap_or(opts.body.len()),
        location
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&opts.body);
}

/// Returns (request path, optional User-Agent value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("");
    let mut user_agent = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
