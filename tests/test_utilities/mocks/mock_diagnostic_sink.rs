use lockfile_inventory::prelude::*;
use std::sync::Mutex;

/// Mock DiagnosticSink recording every notice by level
#[derive(Default)]
pub struct MockDiagnosticSink {
    warnings: Mutex<Vec<String>>,
    debugs: Mutex<Vec<String>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn debug(&self, message: &str) {
        self.debugs.lock().unwrap().push(message.to_string());
    }
}
