/// Result type used by application plumbing (config loading, CLI, output).
/// Per-manifest extraction failures use `ExtractionError` instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
