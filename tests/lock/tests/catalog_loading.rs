//! Catalog file → selection report, end to end.

use std::path::{Path, PathBuf};

use qanit_harness::config::RunConfig;
use qanit_harness::loader::{load_catalog, parse_catalog_str, CatalogColumns, CatalogLoadError};
use qanit_harness::runner::run_selection;
use qanit_search::search::TerminationReason;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/chapters.csv")
}

#[test]
fn fixture_loads_every_row() {
    let catalog = load_catalog(fixture_path(), &CatalogColumns::default()).expect("fixture loads");
    assert_eq!(catalog.len(), 15);
    assert_eq!(catalog.label(103), Some("Al-'Asr"));
    assert_eq!(catalog.total_quantity(), 86);
}

#[test]
fn ten_verses_picks_the_lightest_collected_pair() {
    let catalog = load_catalog(fixture_path(), &CatalogColumns::default()).expect("fixture loads");
    let report = run_selection(&catalog, 10, &RunConfig::default())
        .expect("run succeeds")
        .expect("10 verses is reachable");

    assert_eq!(report.labels, vec!["Quraysh", "An-Nas"]);
    assert_eq!(report.items, vec![106, 114]);
    assert_eq!(report.quantity, 10);
    assert_eq!(report.side_cost, 37);
    assert_eq!(report.solutions_found, 10);
    assert_eq!(
        report.stats.termination,
        TerminationReason::SolutionCutoffReached
    );
}

#[test]
fn twenty_verses_prefers_the_exact_pair() {
    let catalog = load_catalog(fixture_path(), &CatalogColumns::default()).expect("fixture loads");
    let report = run_selection(&catalog, 20, &RunConfig::default())
        .expect("run succeeds")
        .expect("20 verses is reachable");

    assert_eq!(report.labels, vec!["Al-Qari'ah", "Al-Humazah"]);
    assert_eq!(report.quantity, 20);
    assert_eq!(report.side_cost, 69);
}

#[test]
fn report_bytes_are_stable_across_loads() {
    let first = load_catalog(fixture_path(), &CatalogColumns::default()).expect("fixture loads");
    let second = load_catalog(fixture_path(), &CatalogColumns::default()).expect("fixture loads");
    assert_eq!(first.digest().expect("digest"), second.digest().expect("digest"));

    let a = run_selection(&first, 20, &RunConfig::default())
        .expect("run succeeds")
        .expect("reachable");
    let b = run_selection(&second, 20, &RunConfig::default())
        .expect("run succeeds")
        .expect("reachable");
    assert_eq!(
        a.to_canonical_json_bytes().expect("canonical bytes"),
        b.to_canonical_json_bytes().expect("canonical bytes")
    );
    assert_eq!(a.digest().expect("digest"), b.digest().expect("digest"));
}

#[test]
fn file_and_string_sources_agree() {
    let text = std::fs::read_to_string(fixture_path()).expect("fixture readable");
    let from_str = parse_catalog_str(&text, &CatalogColumns::default()).expect("parses");
    let from_file = load_catalog(fixture_path(), &CatalogColumns::default()).expect("loads");
    assert_eq!(from_str, from_file);
}

#[test]
fn malformed_file_reports_the_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.csv");
    std::fs::write(
        &path,
        "id,name,place,verses,words\n1,Al-Fatihah,Meccan,7,29\n2,Al-Baqarah,Medinan,many,6144\n",
    )
    .expect("write fixture");

    let err = load_catalog(&path, &CatalogColumns::default()).expect_err("bad integer");
    match err {
        CatalogLoadError::InvalidInteger { line, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(value, "many");
        }
        other => panic!("expected InvalidInteger, got {other:?}"),
    }
}
