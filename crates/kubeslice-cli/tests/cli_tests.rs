//! End-to-end tests for the kubeslice binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MERGED: &str = "\
apiVersion: v1
kind: Config
clusters:
- name: A
  cluster:
    server: https://a.example.com:6443
- name: B
  cluster:
    certificate-authority-data: AQI=
    server: https://b.example.com:6443
contexts:
- name: x
  context:
    cluster: B
    user: u2
current-context: x
users:
- name: u1
  user:
    client-certificate-data: AQI=
- name: u2
  user:
    client-key-data: AQI=
";

fn kubeslice() -> Command {
    Command::cargo_bin("kubeslice").unwrap()
}

#[test]
fn extracts_context_to_stdout() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    fs::write(&path, MERGED).unwrap();

    kubeslice()
        .arg(&path)
        .arg("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("current-context: x"))
        .stdout(predicate::str::contains("name: B"))
        .stdout(predicate::str::contains("name: u2"))
        .stdout(predicate::str::contains("name: A").not())
        .stdout(predicate::str::contains("name: u1").not());
}

#[test]
fn flattens_file_backed_credentials() {
    let temp = TempDir::new().unwrap();
    let ca_path = temp.path().join("ca.pem");
    fs::write(&ca_path, [0x01, 0x02]).unwrap();

    let config = format!(
        "\
apiVersion: v1
clusters:
- name: local
  cluster:
    certificate-authority: {}
    server: https://localhost:6443
contexts:
- name: local
  context:
    cluster: local
    user: admin
users:
- name: admin
  user: {{}}
",
        ca_path.display()
    );
    let path = temp.path().join("config");
    fs::write(&path, config).unwrap();

    kubeslice()
        .arg(&path)
        .arg("local")
        .assert()
        .success()
        .stdout(predicate::str::contains("certificate-authority-data: AQI="))
        .stdout(predicate::str::contains(ca_path.to_str().unwrap()).not());
}

#[test]
fn unknown_context_fails_with_its_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    fs::write(&path, MERGED).unwrap();

    kubeslice()
        .arg(&path)
        .arg("missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context not found: missing"));
}

#[test]
fn unreadable_input_file_fails() {
    kubeslice()
        .arg("/nonexistent/kubeconfig")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn missing_arguments_fail() {
    kubeslice().assert().failure();
}
