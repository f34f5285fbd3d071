use super::*;
use crate::adapters::outbound::identity::PurlIdentifier;
use crate::application::factories::ExtractorRegistryFactory;
use crate::ports::outbound::{DepFile, InMemoryFile, LockfileExtractor};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;

const PIPFILE_LOCK: &str = r#"{
  "default": {
    "markupsafe": {
      "version": "==2.1.1"
    }
  }
}
"#;

const GO_MOD: &str = "module example.com/app

go 1.21

require github.com/pkg/errors v0.9.1
";

// Mock implementations for testing
struct MockManifestReader {
    files: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, content)| (PathBuf::from(path), content.to_string()))
                .collect(),
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn open(&self, path: &Path) -> std::result::Result<Box<dyn DepFile>, ExtractionError> {
        match self.files.get(path) {
            Some(content) => Ok(Box::new(InMemoryFile::new(path, content.as_bytes()))),
            None => Err(ExtractionError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    warnings: Mutex<Vec<String>>,
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn debug(&self, _message: &str) {}
}

#[derive(Clone, Default)]
struct MockProgressReporter {
    warnings: Rc<RefCell<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, _message: &str) {}
}

/// Takes longer than any timeout used below
struct SlowExtractor;

impl LockfileExtractor for SlowExtractor {
    fn format(&self) -> &'static str {
        "slow.lock"
    }

    fn should_extract(&self, path: &Path) -> bool {
        path.ends_with("slow.lock")
    }

    fn extract(
        &self,
        _file: Box<dyn DepFile>,
        _diagnostics: &dyn DiagnosticSink,
    ) -> std::result::Result<Vec<PackageRecord>, ExtractionError> {
        std::thread::sleep(Duration::from_millis(300));
        Ok(Vec::new())
    }
}

type TestUseCase =
    BuildInventoryUseCase<MockManifestReader, RecordingSink, PurlIdentifier, MockProgressReporter>;

fn use_case(files: &[(&str, &str)], reporter: MockProgressReporter) -> TestUseCase {
    BuildInventoryUseCase::new(
        Arc::new(ExtractorRegistryFactory::default_registry().unwrap()),
        Arc::new(MockManifestReader::new(files)),
        Arc::new(RecordingSink::default()),
        PurlIdentifier::new(),
        reporter,
    )
}

fn request(paths: &[&str]) -> InventoryRequest {
    InventoryRequest::with_defaults(paths.iter().map(PathBuf::from).collect())
}

#[tokio::test]
async fn test_execute_consolidates_manifests() {
    let use_case = use_case(
        &[("py/Pipfile.lock", PIPFILE_LOCK), ("go/go.mod", GO_MOD)],
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request(&["py/Pipfile.lock", "go/go.mod"]))
        .await
        .unwrap();

    assert_eq!(response.extracted_count, 2);
    assert!(!response.has_skipped());

    let identities: Vec<&str> = response.inventory.identities().collect();
    assert_eq!(
        identities,
        vec![
            "pkg:golang/github.com/pkg/errors@0.9.1",
            "pkg:golang/stdlib@1.21.0",
            "pkg:pypi/markupsafe@2.1.1",
        ]
    );

    let markupsafe = response.inventory.get("pkg:pypi/markupsafe@2.1.1").unwrap();
    assert_eq!(markupsafe.locations.len(), 1);
    assert_eq!(markupsafe.locations[0].block.filename, "py/Pipfile.lock");
}

#[tokio::test]
async fn test_execute_skips_failures_and_continues() {
    let reporter = MockProgressReporter::default();
    let use_case = use_case(
        &[
            ("Pipfile.lock", PIPFILE_LOCK),
            ("broken/go.mod", "module a\nfrobnicate x\n"),
            ("package.json", "{}"),
        ],
        reporter.clone(),
    );

    let response = use_case
        .execute(request(&[
            "Pipfile.lock",
            "broken/go.mod",
            "missing/Cargo.lock",
            "package.json",
        ]))
        .await
        .unwrap();

    assert_eq!(response.extracted_count, 1);
    assert_eq!(response.inventory.len(), 1);

    let skipped: Vec<&Path> = response.skipped.iter().map(|s| s.path.as_path()).collect();
    assert_eq!(
        skipped,
        vec![
            Path::new("broken/go.mod"),
            Path::new("missing/Cargo.lock"),
            Path::new("package.json"),
        ]
    );
    assert!(response.skipped[0].reason.starts_with("could not extract from broken/go.mod"));
    assert!(response.skipped[1].reason.contains("could not read"));
    assert!(response.skipped[2].reason.contains("no extractor registered"));
    assert_eq!(reporter.warnings.borrow().len(), 3);
}

#[tokio::test]
async fn test_execute_deduplicates_paths() {
    let use_case = use_case(&[("Pipfile.lock", PIPFILE_LOCK)], MockProgressReporter::default());

    let response = use_case
        .execute(request(&["Pipfile.lock", "Pipfile.lock"]))
        .await
        .unwrap();

    assert_eq!(response.extracted_count, 1);
    let markupsafe = response.inventory.get("pkg:pypi/markupsafe@2.1.1").unwrap();
    assert_eq!(markupsafe.locations.len(), 1);
}

#[tokio::test]
async fn test_execute_output_independent_of_input_order() {
    let files = [
        ("a/requirements.txt", "MarkupSafe==2.1.1\n"),
        ("b/Pipfile.lock", PIPFILE_LOCK),
        ("c/go.mod", GO_MOD),
    ];

    let forward = use_case(&files, MockProgressReporter::default())
        .execute(request(&["a/requirements.txt", "b/Pipfile.lock", "c/go.mod"]))
        .await
        .unwrap();
    let backward = use_case(&files, MockProgressReporter::default())
        .execute(request(&["c/go.mod", "b/Pipfile.lock", "a/requirements.txt"]))
        .await
        .unwrap();

    assert_eq!(forward.inventory, backward.inventory);

    let markupsafe = forward.inventory.get("pkg:pypi/markupsafe@2.1.1").unwrap();
    assert_eq!(markupsafe.name, "MarkupSafe");
    let files: Vec<&str> = markupsafe
        .locations
        .iter()
        .map(|l| l.block.filename.as_str())
        .collect();
    assert_eq!(files, vec!["a/requirements.txt", "b/Pipfile.lock"]);
}

#[tokio::test]
async fn test_execute_no_manifests() {
    let use_case = use_case(&[], MockProgressReporter::default());
    let err = use_case.execute(request(&[])).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InventoryError>(),
        Some(InventoryError::NoManifests)
    ));
}

#[tokio::test]
async fn test_execute_times_out_slow_extraction() {
    let mut registry = ExtractorRegistryFactory::default_registry().unwrap();
    registry.register(Box::new(SlowExtractor)).unwrap();

    let use_case = BuildInventoryUseCase::new(
        Arc::new(registry),
        Arc::new(MockManifestReader::new(&[
            ("slow.lock", ""),
            ("Pipfile.lock", PIPFILE_LOCK),
        ])),
        Arc::new(RecordingSink::default()),
        PurlIdentifier::new(),
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(InventoryRequest::new(
            vec![PathBuf::from("slow.lock"), PathBuf::from("Pipfile.lock")],
            Duration::from_millis(20),
            2,
        ))
        .await
        .unwrap();

    assert_eq!(response.extracted_count, 1);
    assert_eq!(response.skipped.len(), 1);
    assert_eq!(response.skipped[0].path, PathBuf::from("slow.lock"));
    assert!(response.skipped[0].reason.contains("timed out"));
}

#[tokio::test]
async fn test_execute_routes_version_warnings_to_sink() {
    let diagnostics = Arc::new(RecordingSink::default());
    let use_case = BuildInventoryUseCase::new(
        Arc::new(ExtractorRegistryFactory::default_registry().unwrap()),
        Arc::new(MockManifestReader::new(&[(
            "go.mod",
            "module a\n\nrequire example.com/b master\n",
        )])),
        Arc::clone(&diagnostics),
        PurlIdentifier::new(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(&["go.mod"])).await.unwrap();

    assert!(response.inventory.contains("pkg:golang/example.com/b@0.0.0"));
    assert_eq!(diagnostics.warnings.lock().unwrap().len(), 1);
}
