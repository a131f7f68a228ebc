//! Demo orchestration driven through a loaded configuration file.

use relay_cli::commands::demo::START_LINE;
use relay_cli::{run_with, Commands};
use relay_core::Config;
use relay_integration_tests::Harness;
use std::fs;
use std::time::Duration;

#[tokio::test]
async fn test_demo_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relay.json5");
    fs::write(
        &path,
        r#"{
            channel: { kind: "whatsapp", recipient: "+4420000000", latency_ms: 5 },
        }"#,
    )
    .unwrap();
    let config = Config::load(&path).unwrap();
    config.validate().unwrap();

    let harness = Harness::new();
    run_with(Commands::Demo, &harness.context(config))
        .await
        .unwrap();

    let lines = harness.sink.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], START_LINE);
    assert!(lines[1..].iter().all(|l| l.contains("| To: +4420000000 |")));
    assert_eq!(
        harness.clock.sleeps(),
        vec![Duration::from_millis(5), Duration::from_millis(5)]
    );
}

#[tokio::test]
async fn test_demo_failure_reported_once() {
    let config = Config::parse(r#"{ channel: { kind: "facebook" } }"#).unwrap();

    let harness = Harness::new();
    let result = run_with(Commands::Demo, &harness.context(config)).await;

    assert!(result.is_ok());
    let lines = harness.sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Error: Channel not implemented: facebook");
}
