use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "3000"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    assert!(v["ticks"].as_u64().unwrap() <= 3000);
    assert!(v["outcome"].is_null() || v["outcome"] == "WIN" || v["outcome"] == "LOSE");
    assert_eq!(v["config"]["cols"], 15);
}
