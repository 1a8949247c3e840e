//! Errors that can occur during selector evaluation.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The parse result as a whole did not succeed.
    #[error("the selector cannot extract result tokens because the result is invalid")]
    InvalidResult,

    /// A visited token's block did not succeed.
    #[error(
        "the block's token (name: {token}) is NOT successful and therefore its value cannot be extracted"
    )]
    BlockNotSuccessful { token: String },

    /// Path resolution was invoked without any path segment.
    #[error("the path is mandatory in order to retrieve the token's value, none provided")]
    EmptyPath,

    /// Token nesting exceeded the configured recursion limit.
    #[error("recursion limit of {limit} exceeded while resolving the selector")]
    DepthExceeded { limit: u32 },
}
