//! Local archive service stand-in shared by the integration tests
#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

/// Request seen by the stand-in service
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub body: String,
    pub authorization: Option<String>,
}

pub struct ServiceStub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl ServiceStub {
    /// Serve `(status, body)` for every POST until dropped
    pub fn answering(status: u16, body: &str) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base_url = format!("http://{}", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let body = body.to_string();

        // Stops once the stub is dropped
        thread::spawn(move || loop {
            let mut req = match server.recv_timeout(Duration::from_millis(500)) {
                Ok(Some(req)) => req,
                Ok(None) => {
                    if Arc::strong_count(&recorded) == 1 {
                        break;
                    }
                    continue;
                }
                Err(_) => break,
            };
            let mut content = String::new();
            let _ = req.as_reader().read_to_string(&mut content);
            let authorization = req
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            recorded.lock().unwrap().push(Recorded {
                url: req.url().to_string(),
                body: content,
                authorization,
            });
            let response = Response::from_string(body.clone())
                .with_status_code(status)
                .with_header(Header::from_bytes("Content-Type", "application/json").expect("header"));
            let _ = req.respond(response);
        });

        Self { base_url, requests }
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
