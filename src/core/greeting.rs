/// Text written to stdout by the runner.
pub const GREETING: &str = "Hello, world!";

/// Returns the greeting printed by [`crate::core::runner::foo`].
pub fn bar() -> &'static str {
    GREETING
}
