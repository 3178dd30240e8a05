//! Integration tests for the kmroots CLI.
//! Tests the underlying library functions that the binary invokes.

use kmroots_core::vector::RootVector;
use kmroots_engine::config::KmrootsConfig;
use kmroots_engine::export::{self, ExportFormat};
use kmroots_engine::feingold_frenkel::FeingoldFrenkel;
use kmroots_engine::system::RootSystem;

#[test]
fn test_construct_and_export_pipeline() {
    let tmpdir = tempfile::tempdir().unwrap();
    let output = tmpdir.path().join("roots.txt");

    let mut system = RootSystem::new(FeingoldFrenkel::new());
    system.construct(5).unwrap();
    export::write(&output, &system.roots(), ExportFormat::Txt).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    // 3 + 2 + 3 + 3 + 4 roots through height 5.
    assert_eq!(contents.lines().count(), 15);
    assert!(contents.lines().any(|line| line == "2,2,1,2"));
}

#[test]
fn test_config_driven_output_settings() {
    let tmpdir = tempfile::tempdir().unwrap();
    std::fs::write(
        tmpdir.path().join("kmroots.toml"),
        "[construction]\nparallel = false\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = KmrootsConfig::load(tmpdir.path()).unwrap();
    assert!(!config.construction.parallel);
    let format: ExportFormat = config.output.format.parse().unwrap();
    assert_eq!(format, ExportFormat::Json);

    let mut system = RootSystem::with_parallelism(FeingoldFrenkel::new(), config.construction.parallel);
    system.construct(2).unwrap();
    let mult = system
        .multiplicity(&RootVector::from([1, 1, 0]))
        .expect("null root resolved at height 2");
    assert_eq!(mult.to_string(), "1");
}

#[test]
fn test_unknown_format_is_rejected_before_construction() {
    let err = "csv".parse::<ExportFormat>().unwrap_err();
    assert!(err.contains("csv"));
}
