use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn write_fixture(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn parse_renders_operational_data_reply() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        dir.path(),
        "reply.xml",
        r#"<data>
  <interfaces xmlns="http://example.com/ns/lab-net-device">
    <interface>
      <name>GigabitEthernet1/1</name>
      <oper-status xmlns="http://example.com/ns/lab-net-device-operstate">down</oper-status>
    </interface>
  </interfaces>
</data>"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("GigabitEthernet1/1"))
        .stdout(predicate::str::contains("oper-status: down"));
}

#[test]
fn parse_unwraps_full_rpc_reply() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        dir.path(),
        "reply.xml",
        r#"<rpc-reply xmlns="urn:ietf:params:xml:ns:netconf:base:1.0" message-id="101">
  <data>
    <vlans xmlns="http://example.com/ns/lab-net-device">
      <vlan><id>10</id><name>users</name></vlan>
    </vlans>
  </data>
</rpc-reply>"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("id=10 name=users"))
        .stderr(predicate::str::contains("message-id: 101"));
}

#[test]
fn parse_forwards_rpc_errors_as_failure() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        dir.path(),
        "reply.xml",
        r#"<rpc-reply message-id="2">
  <rpc-error>
    <error-type>application</error-type>
    <error-tag>invalid-value</error-tag>
    <error-severity>error</error-severity>
    <error-message>An unexpected namespace is present</error-message>
  </rpc-error>
</rpc-reply>"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid-value"))
        .stderr(predicate::str::contains("unexpected namespace"));
}

#[test]
fn parse_json_emits_machine_readable_model() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        dir.path(),
        "reply.xml",
        r#"<data>
  <vrfs xmlns="http://example.com/ns/lab-net-device">
    <vrf><name>blue</name><rd>65001:10</rd></vrf>
  </vrfs>
</data>"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    let output = cmd
        .arg("parse")
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["vrfs"]["vrf"][0]["name"], "blue");
    assert_eq!(json["vrfs"]["vrf"][0]["rd"], "65001:10");
}

#[test]
fn parse_reports_ok_reply_without_data() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        dir.path(),
        "reply.xml",
        r#"<rpc-reply message-id="1"><ok/></rpc-reply>"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn parse_fails_on_malformed_payload() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(dir.path(), "reply.xml", "<data><vlans></data>");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse").arg(&input).assert().failure();
}

#[test]
fn parse_fails_on_missing_file() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("parse")
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
