//! Pipeline tests: the run writes the generated file, and any fatal failure
//! leaves the destination untouched.

use std::cell::Cell;

use proptype_core::config::extract_config::DEFAULT_SOURCE_URL;
use proptype_core::config::ExtractConfig;
use proptype_core::errors::{ExtractError, ExtractResult, ProptypeErrorCode};
use proptype_core::ModifierCategory;
use proptype_extract::fetch::{SourceFetcher, StaticFetcher};
use proptype_extract::ExtractPipeline;

const SOURCE: &str = r#"
class Modifiers {
    private static final Object[][] booleanModifiers = {
        {"Never Fumble", null},
    };
    private static final Object[][] stringModifiers = {
        {"Avatar", null},
        {"Wiki Name", null},
    };
}
"#;

struct FailingFetcher {
    calls: Cell<usize>,
}

impl SourceFetcher for FailingFetcher {
    fn fetch(&self, url: &str) -> ExtractResult<String> {
        self.calls.set(self.calls.get() + 1);
        Err(ExtractError::HttpStatus {
            url: url.to_string(),
            status: 503,
        })
    }
}

fn config_for(dir: &tempfile::TempDir) -> ExtractConfig {
    ExtractConfig {
        output_path: Some(
            dir.path()
                .join("schema/generated.rs")
                .to_string_lossy()
                .into_owned(),
        ),
        ..ExtractConfig::default()
    }
}

#[test]
fn run_writes_generated_file() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), StaticFetcher::new(SOURCE));

    let report = pipeline.run().unwrap();

    let written = std::fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(written.len(), report.bytes_written);
    assert!(written.contains("pub const BOOLEAN_MODIFIERS"));
    assert!(written.contains("pub const MONSTER_MODIFIERS: &[&str] = &[\n    \"Avatar\",\n];"));
    assert!(!dir.path().join("schema/generated.rs.tmp").exists());

    let counts: Vec<_> = report.counts.iter().filter(|(_, n)| *n > 0).collect();
    assert_eq!(
        counts,
        vec![
            &(ModifierCategory::Boolean, 1),
            &(ModifierCategory::Monster, 1),
            &(ModifierCategory::String, 1),
        ]
    );
}

#[test]
fn rerun_on_same_source_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), StaticFetcher::new(SOURCE));

    let first = pipeline.run().unwrap();
    let first_bytes = std::fs::read(&first.output_path).unwrap();
    let second = pipeline.run().unwrap();
    let second_bytes = std::fs::read(&second.output_path).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = FailingFetcher { calls: Cell::new(0) };
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), &fetcher);

    let err = pipeline.run().unwrap_err();
    assert_eq!(err.error_code(), "HTTP_STATUS");
    assert_eq!(fetcher.calls.get(), 1, "no retries");
    assert!(!dir.path().join("schema").exists());
}

#[test]
fn parse_failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let good = ExtractPipeline::with_fetcher(config.clone(), StaticFetcher::new(SOURCE));
    let report = good.run().unwrap();
    let before = std::fs::read(&report.output_path).unwrap();

    let bad = ExtractPipeline::with_fetcher(config, StaticFetcher::new("class Broken {"));
    let err = bad.run().unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }));

    let after = std::fs::read(&report.output_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn render_does_not_touch_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), StaticFetcher::new(SOURCE));

    let rendered = pipeline.render().unwrap();
    assert!(rendered.contents.contains("pub enum StringModifier"));
    assert_eq!(rendered.table.total(), 3);
    assert!(!dir.path().join("schema").exists());
}

#[test]
fn header_names_the_local_source_when_given() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), StaticFetcher::new(SOURCE))
        .with_provenance("vendor/Modifiers.java");

    let rendered = pipeline.render().unwrap();
    assert!(rendered.contents.contains("\n// vendor/Modifiers.java\n"));
    assert!(!rendered.contents.contains(DEFAULT_SOURCE_URL));
}

#[test]
fn header_names_the_configured_url_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExtractPipeline::with_fetcher(config_for(&dir), StaticFetcher::new(SOURCE));

    assert_eq!(pipeline.provenance(), DEFAULT_SOURCE_URL);
    let rendered = pipeline.render().unwrap();
    assert!(rendered.contents.contains(DEFAULT_SOURCE_URL));
}

#[test]
fn invalid_config_is_rejected_before_fetching() {
    let config = ExtractConfig {
        source_url: Some("ftp://example.invalid/Modifiers.java".to_string()),
        ..ExtractConfig::default()
    };
    let err = ExtractPipeline::from_config(config).err().unwrap();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
