#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Bytes promised by `Content-Length` in the truncated response
pub const PROMISED_BODY_LEN: usize = 100;

/// Body actually sent before the connection is closed
pub const PARTIAL_BODY: &str = r#"{"id":1,"title""#;

/// A localhost base URL nothing listens on
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Start a server that answers one request with a `201` whose body is cut
/// short: it promises `PROMISED_BODY_LEN` bytes, sends `PARTIAL_BODY`, then
/// closes the connection. Returns the base URL.
pub fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        read_request(&mut stream);

        let head = format!(
            "HTTP/1.1 201 Created\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n",
            PROMISED_BODY_LEN
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(PARTIAL_BODY.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

/// Consume the whole request (head and `Content-Length` body) so closing
/// the socket is a clean FIN rather than a reset.
fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if buf.len() >= head_end + 4 + body_len {
            return;
        }
    }
}
