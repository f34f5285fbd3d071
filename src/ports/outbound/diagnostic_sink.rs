/// DiagnosticSink port for non-fatal notices raised during extraction
///
/// Implementations must never block or fail: a notice is informational and
/// extraction continues regardless of what the sink does with it.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a warning, e.g. a version that had to be defaulted
    fn warn(&self, message: &str);

    /// Reports a debug-level notice, e.g. a record with no canonical identity
    fn debug(&self, message: &str);
}
