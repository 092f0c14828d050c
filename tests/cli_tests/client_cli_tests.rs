//! Command-line tests for the client and server binaries
//!
//! These tests verify:
//! - Usage errors (missing request, bad port, unknown flag) exit with 2
//! - Request text and connection failures exit with 1 and report on stderr
//! - A successful query prints exactly one line on stdout and exits 0
//! - Host names are accepted for `-s`

use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command};
use std::thread;
use std::time::Duration;

use assert_cmd::prelude::*;
use meteowire::format::{CITY_NOT_AVAILABLE_TEXT, INVALID_REQUEST_TEXT};
use predicates::str::{contains, is_empty, is_match};

// =============================================================================
// Helpers
// =============================================================================

/// Kills the server child process when dropped
struct ServerGuard {
    child: Child,
    port: u16,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Ask the OS for a port nobody is listening on
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Start `meteowire-server --seed <seed>` and wait until it accepts
fn run_server(seed: u64) -> ServerGuard {
    let port = free_port();
    let child = Command::cargo_bin("meteowire-server")
        .unwrap()
        .args(["-p", &port.to_string(), "--seed", &seed.to_string()])
        .env_remove("RUST_LOG")
        .spawn()
        .unwrap();
    let guard = ServerGuard { child, port };

    // An empty connection costs the server nothing but a logged short read
    for _ in 0..100 {
        if TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return guard;
        }
        thread::sleep(Duration::from_millis(50));
    }
    panic!("server did not start listening on port {}", port);
}

fn client() -> Command {
    let mut cmd = Command::cargo_bin("meteowire-client").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn query(server: &str, port: u16, request: &str) -> assert_cmd::assert::Assert {
    client()
        .args(["-s", server, "-p", &port.to_string(), "-r", request])
        .assert()
}

// =============================================================================
// Successful Queries
// =============================================================================

#[test]
fn client_prints_single_result_line() {
    let server = run_server(7);

    query("127.0.0.1", server.port, "  h   VENEZIA  ")
        .success()
        .stdout(is_match(
            r"^Received result from server ip 127\.0\.0\.1\. Venezia: Umidità = \d+\.\d%\n$",
        ).unwrap())
        .stderr(is_empty());
}

#[test]
fn client_accepts_host_name() {
    let server = run_server(7);

    query("localhost", server.port, "t roma")
        .success()
        .stdout(contains("Received result from server ip "))
        .stdout(contains("Roma: Temperatura = "));
}

#[test]
fn client_reports_unsupported_city() {
    let server = run_server(7);

    query("127.0.0.1", server.port, "t Atlantide")
        .success()
        .stdout(contains(CITY_NOT_AVAILABLE_TEXT));
}

#[test]
fn client_reports_invalid_type() {
    let server = run_server(7);

    query("127.0.0.1", server.port, "z Roma")
        .success()
        .stdout(contains(INVALID_REQUEST_TEXT));
}

#[test]
fn seeded_server_is_reproducible() {
    let first = {
        let server = run_server(1234);
        query("127.0.0.1", server.port, "p Milano").success().get_output().stdout.clone()
    };
    let second = {
        let server = run_server(1234);
        query("127.0.0.1", server.port, "p Milano").success().get_output().stdout.clone()
    };

    assert_eq!(first, second);
}

// =============================================================================
// Client Usage Errors
// =============================================================================

#[test]
fn client_requires_request() {
    client()
        .args(["-s", "127.0.0.1"])
        .assert()
        .failure()
        .code(2)
        .stdout(is_empty())
        .stderr(contains("Usage"));
}

#[test]
fn client_rejects_bad_port() {
    for port in ["0", "65536", "abc"] {
        client()
            .args(["-p", port, "-r", "t Roma"])
            .assert()
            .failure()
            .code(2)
            .stderr(contains("invalid value"));
    }
}

#[test]
fn client_rejects_unknown_flag() {
    client()
        .args(["-x", "-r", "t Roma"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("unexpected argument"));
}

#[test]
fn client_rejects_request_without_city() {
    client()
        .args(["-r", "t"])
        .assert()
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Parse error: missing city name"));
}

#[test]
fn client_rejects_empty_request() {
    client()
        .args(["-r", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Parse error"));
}

#[test]
fn client_reports_refused_connection() {
    let port = free_port();

    query("127.0.0.1", port, "t Roma")
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Transport error"));
}

// =============================================================================
// Server Usage Errors
// =============================================================================

#[test]
fn server_prints_version() {
    Command::cargo_bin("meteowire-server")
        .unwrap()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn server_rejects_bad_port() {
    for port in ["0", "70000", "abc"] {
        Command::cargo_bin("meteowire-server")
            .unwrap()
            .args(["-p", port])
            .assert()
            .failure()
            .code(2)
            .stderr(contains("invalid value"));
    }
}

#[test]
fn server_rejects_unknown_flag() {
    Command::cargo_bin("meteowire-server")
        .unwrap()
        .arg("-s")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("unexpected argument"));
}
