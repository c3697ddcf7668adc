use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn request_get_config_declares_subtree_filter() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("request")
        .arg("get-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("<get-config"))
        .stdout(predicate::str::contains("<source><running/></source>"))
        .stdout(predicate::str::contains(
            r#"<lnd:vlans xmlns:lnd="http://example.com/ns/lab-net-device"/>"#,
        ))
        .stdout(predicate::str::contains(
            r#"<lndq:qos xmlns:lndq="http://example.com/ns/lab-net-device-qos"/>"#,
        ));
}

#[test]
fn request_get_data_targets_operational_datastore() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("request")
        .arg("get-data")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "urn:ietf:params:xml:ns:yang:ietf-netconf-nmda",
        ))
        .stdout(predicate::str::contains("<datastore>operational</datastore>"));
}

#[test]
fn request_rejects_unknown_mode() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yanglab"));
    cmd.arg("request").arg("get-everything").assert().failure();
}
