use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

pub const FIXTURE: &str = include_str!("../fixtures/news.json");

/// Start a throwaway HTTP/1.1 server on localhost and return its base URL.
///
/// Routes: `/v3/news` serves the fixture, `/garbage` serves a non-JSON body,
/// `/latin1` serves the fixture encoded as ISO-8859-1, everything else is a 404.
pub fn serve() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) if line == "\r\n" => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/");
            let (status, charset, body) = match path {
                "/v3/news" => ("200 OK", "utf-8", FIXTURE.as_bytes().to_vec()),
                "/garbage" => ("200 OK", "utf-8", b"<html>maintenance</html>".to_vec()),
                "/latin1" => ("200 OK", "iso-8859-1", latin1(FIXTURE)),
                _ => ("404 Not Found", "utf-8", b"{\"Message\":\"Not found\"}".to_vec()),
            };
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json; charset={charset}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}

/// Characters above U+00FF become `?`; the fixture only uses them in emoji.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
