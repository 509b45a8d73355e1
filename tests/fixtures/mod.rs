// Test fixtures shared by the integration tests
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use time_tools::services::clock::ManualClock;

/// Common instants used as clock origins
pub mod instants {
    use super::*;

    /// Monday 2024-01-15 15:20:00 UTC (epoch 1705332000)
    pub fn jan_15_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 15, 20, 0).unwrap()
    }

    /// One second before the UK summer time switch
    pub fn before_bst_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 0, 59, 59).unwrap()
    }
}

pub fn manual_clock(start: DateTime<Utc>) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One-shot loopback HTTP servers for the holiday client
pub mod http {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves `response` verbatim to the first connection and returns the
    /// base URL to point a client at.
    pub fn serve_once(response: Vec<u8>) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            // The client may hang up early once it has read enough
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        });

        (base_url, handle)
    }

    pub fn status_response(status_line: &str) -> Vec<u8> {
        format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status_line
        )
        .into_bytes()
    }

    /// A 200 response streamed in chunks with no Content-Length header.
    pub fn chunked_json_response(body: &str, chunk_size: usize) -> Vec<u8> {
        let mut response = b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n".to_vec();
        for chunk in body.as_bytes().chunks(chunk_size) {
            response.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
            response.extend_from_slice(chunk);
            response.extend_from_slice(b"\r\n");
        }
        response.extend_from_slice(b"0\r\n\r\n");
        response
    }

    /// A URL on a port nothing listens on.
    pub fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }
}
