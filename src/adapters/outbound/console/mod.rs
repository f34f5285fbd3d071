/// Console adapters for progress output and diagnostics
mod diagnostic_sink;
mod progress_reporter;

pub use diagnostic_sink::TracingDiagnosticSink;
pub use progress_reporter::StderrProgressReporter;
