use crate::ports::outbound::DiagnosticSink;

/// TracingDiagnosticSink adapter forwarding extraction notices to `tracing`
///
/// Warnings are emitted at WARN, identity notices at DEBUG; what is shown is
/// decided by the subscriber's filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "lockfile_inventory::extraction", "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "lockfile_inventory::grouping", "{}", message);
    }
}
