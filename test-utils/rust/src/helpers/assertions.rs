use anchor_lang::error::Error;

/// Result of an `expect_revert` check, containing details about the failure
#[derive(Debug, Clone)]
pub struct RevertInfo {
    /// The error that caused the revert
    pub error: String,
    /// Anchor error code, if the failure carried one
    pub code: Option<u32>,
}

impl RevertInfo {
    fn from_error(error: &Error) -> Self {
        let code = match error {
            Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
            Error::ProgramError(_) => None,
        };

        Self {
            error: error.to_string(),
            code,
        }
    }

    /// Check if the error message contains the expected text
    pub fn contains(&self, message: &str) -> bool {
        self.error.contains(message)
    }

    /// Check if the revert matches an Anchor error code
    pub fn has_error_code(&self, code: u32) -> bool {
        self.code == Some(code)
    }
}

/// Assert approximate equality with absolute delta
pub fn assert_approx_eq(actual: u128, expected: u128, delta: u128) {
    let diff = actual.abs_diff(expected);

    assert!(
        diff <= delta,
        "Values not approximately equal.\nExpected: {}\nActual:   {}\nDiff:     {} (max allowed: {})",
        expected, actual, diff, delta
    );
}

/// Extension trait for `Result` types to provide fluent expect_revert style assertions.
///
/// # Example
/// ```ignore
/// harness.saviour.withdraw(&alice, safe.id, 0)
///     .expect_revert(ErrorCodes::SaviourZeroAmount);
/// ```
pub trait ExpectRevertResultExt<T> {
    /// Assert that the result failed with exactly `expected`.
    fn expect_revert(self, expected: impl Into<Error>) -> RevertInfo;

    /// Assert that the result is an error containing the expected message.
    fn expect_revert_containing(self, expected_message: &str) -> RevertInfo;

    /// Assert that the result is an error with the specified Anchor error code.
    fn expect_revert_with_code(self, error_code: u32) -> RevertInfo;

    /// Assert that the result is an error, returning the `RevertInfo` for further inspection.
    fn expect_failure(self) -> RevertInfo;
}

impl<T> ExpectRevertResultExt<T> for anchor_lang::Result<T> {
    fn expect_revert(self, expected: impl Into<Error>) -> RevertInfo {
        let expected: Error = expected.into();
        let info = self.expect_failure();

        let matches = match &expected {
            Error::AnchorError(anchor_error) => info.has_error_code(anchor_error.error_code_number),
            Error::ProgramError(_) => info.error == expected.to_string(),
        };
        assert!(
            matches,
            "Expected revert with {}, but got error: {}",
            expected, info.error
        );
        info
    }

    fn expect_revert_containing(self, expected_message: &str) -> RevertInfo {
        let info = self.expect_failure();
        assert!(
            info.contains(expected_message),
            "Expected revert containing {:?}, but got error: {}",
            expected_message,
            info.error
        );
        info
    }

    fn expect_revert_with_code(self, error_code: u32) -> RevertInfo {
        let info = self.expect_failure();
        assert!(
            info.has_error_code(error_code),
            "Expected revert with code {}, but got error: {}",
            error_code,
            info.error
        );
        info
    }

    fn expect_failure(self) -> RevertInfo {
        match self {
            Ok(_) => panic!("Expected action to fail, but it succeeded"),
            Err(err) => RevertInfo::from_error(&err),
        }
    }
}
