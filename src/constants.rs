pub(crate) const DEFAULT_TARGET_URL: &str = "http://localhost:80";
pub(crate) const DEFAULT_EXPECTED_STATUS: u16 = 200;
pub(crate) const DEFAULT_EXPECTED_SNIPPET: &str = "v1.jpg";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
