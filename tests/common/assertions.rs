//! Assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains the expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Deployed file hello");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
