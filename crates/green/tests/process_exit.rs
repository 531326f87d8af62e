//! Exit codes of the `green-service` binary

#![cfg(unix)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const BIN: &str = env!("CARGO_BIN_EXE_green-service");
const TIMEOUT: Duration = Duration::from_secs(20);

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn spawn(port: u16) -> Child {
    Command::new(BIN)
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env_remove("DEBUG")
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
}

fn get_health(port: u16) -> Option<String> {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).ok()?;
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .ok()?;
    let mut response = String::new();
    stream.read_to_string(&mut response).ok()?;
    Some(response)
}

fn wait_until_serving(port: u16, child: &mut Child) -> String {
    let deadline = Instant::now() + TIMEOUT;
    loop {
        if let Some(response) = get_health(port) {
            return response;
        }
        if let Some(status) = child.try_wait().unwrap() {
            panic!("service exited before serving: {status}");
        }
        assert!(Instant::now() < deadline, "service never started serving");
        thread::sleep(Duration::from_millis(50));
    }
}

fn wait_for_exit(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + TIMEOUT;
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            panic!("service did not exit in time");
        }
        thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn test_bind_conflict_fails_and_sigterm_exits_cleanly() {
    let port = free_port();

    let mut first = spawn(port);
    let response = wait_until_serving(port, &mut first);
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains(r#""environment":"green""#));

    let mut second = spawn(port);
    let status = wait_for_exit(&mut second);
    assert!(!status.success(), "second instance should fail to bind");
    let mut stderr = String::new();
    second
        .stderr
        .take()
        .unwrap()
        .read_to_string(&mut stderr)
        .unwrap();
    assert!(stderr.contains("Failed to bind"), "stderr was: {stderr}");

    let killed = Command::new("kill")
        .args(["-TERM", &first.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = wait_for_exit(&mut first);
    assert_eq!(status.code(), Some(0));
}
