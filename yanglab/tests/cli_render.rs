use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn render_emits_edit_config_with_module_namespaces() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<edit-config"))
        .stdout(predicate::str::contains("<target><running/></target>"))
        .stdout(predicate::str::contains(
            r#"<vlans xmlns="http://example.com/ns/lab-net-device">"#,
        ))
        .stdout(predicate::str::contains(
            r#"<qos xmlns="http://example.com/ns/lab-net-device-qos">"#,
        ))
        .stdout(predicate::str::contains(
            "http://example.com/ns/lab-net-device-identities",
        ))
        .stdout(predicate::str::contains(
            "http://example.com/ns/lab-net-device-purpose",
        ));
}

#[test]
fn render_config_only_drops_the_wrapper() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("render")
        .arg("--config-only")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<config>"))
        .stdout(predicate::str::contains("<edit-config").not());
}

#[test]
fn render_preprov_adds_preprovisioned_interface() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("render")
        .arg("--preprov")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ethernet1/10"))
        .stdout(predicate::str::contains("lndi:preprovisioned"));
}

#[test]
fn render_writes_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("edit-config.xml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("render")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).expect("read output");
    assert!(written.contains("<edit-config"));
    assert!(written.contains("<bgp"));
}
