//! Test fixtures and helpers.

/// Default registry address for testing.
pub const TEST_ADDRESS: &str = "https://registry.test.invalid";

/// Default module owner for testing.
pub const TEST_OWNER: &str = "acme";

/// Default repository name for testing.
pub const TEST_REPOSITORY: &str = "widgets";

/// Generate a unique reference name for a test.
#[must_use]
pub fn unique_reference(prefix: &str) -> String {
    let suffix: String = (0..8).map(|_| fastrand::alphanumeric()).collect();
    format!("{}-{}", prefix, suffix)
}
