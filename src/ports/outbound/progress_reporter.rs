/// ProgressReporter port for human-facing run progress
///
/// Separate from `DiagnosticSink`: this one narrates the run (how many
/// manifests, which were skipped), the sink carries per-record notices.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the manifest list
    ///
    /// # Arguments
    /// * `current` - Manifests processed so far
    /// * `total` - Manifests in this run
    /// * `message` - Optional message, usually the manifest path
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a manifest that was skipped or another non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
