use assert_cmd::Command;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("medqa-assistant").expect("binary exists");
    cmd.env_remove("MEDQA_QNA_DIR");
    cmd
}

#[test]
fn cli_help_runs() {
    bin().arg("--help").assert().success();
}

#[test]
fn ask_falls_back_on_unknown_text() {
    let output = bin().args(["ask", "xyzxyz nonsense"]).output().expect("runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not trained on that"));
}

#[test]
fn ask_json_reports_contraindication() {
    let output = bin()
        .args(["ask", "ibuprofen", "--condition", "active_ulcer", "--json"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["kind"], "drug_advice");
    assert_eq!(value["drug"]["key"], "ibuprofen");
    assert_eq!(value["flags"][0]["kind"], "contraindication");
    assert_eq!(value["flags"][0]["detail"], "active_ulcer");
}

#[test]
fn invalid_profile_is_rejected() {
    bin()
        .args(["ask", "headache", "--age", "200"])
        .assert()
        .failure();
}
