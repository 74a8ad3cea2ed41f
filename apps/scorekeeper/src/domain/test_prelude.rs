use proptest::test_runner::Config;

/// Shared proptest configuration; override case count with PROPTEST_CASES.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(128);
    Config {
        cases,
        ..Config::default()
    }
}
