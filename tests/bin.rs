//! Checks the demo binary's argument handling

use std::process::Command;

#[test]
fn missing_argument_prints_usage_before_reading_settings() {
    let output = Command::new(env!("CARGO_BIN_EXE_main"))
        .env_remove("STEAMLADDER_API_KEY")
        .env_remove("STEAMLADDER_BASE_URL")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "binary failed: {}", stderr);
    assert!(stderr.contains("usage: main <steamid64>"), "got {:?}", stderr);
}
