use super::*;

use rom_prune_core::{GoodTools, NoIntro};

#[test]
fn standalone_dumps_group_by_title() {
    let mut outcome = ScanOutcome::default();
    for name in [
        "Super Game (USA).zip",
        "Super Game (USA, Europe) (Rev 1).zip",
        "Other Game (USA).zip",
    ] {
        collect_candidates(
            &Path::new("/src").join(name),
            vec![name.to_string()],
            &NoIntro,
            &mut outcome,
        );
    }
    assert_eq!(outcome.groups.len(), 2);
    assert_eq!(outcome.groups["Super Game"].len(), 2);
    assert_eq!(outcome.groups["Other Game"].len(), 1);
}

#[test]
fn bundled_dumps_group_by_container() {
    let mut outcome = ScanOutcome::default();
    let container = Path::new("/src/Super Game.7z");
    collect_candidates(
        container,
        vec![
            "Super Game (U) [!].gba".to_string(),
            "Super Game (E) [!].gba".to_string(),
            "Super Game (U) (V1.1) [!].gba".to_string(),
        ],
        &GoodTools,
        &mut outcome,
    );
    assert_eq!(outcome.groups.len(), 1);
    // The European dump is filtered out before grouping
    assert_eq!(outcome.groups["/src/Super Game.7z"].len(), 2);
}

#[test]
fn malformed_names_are_skipped_with_a_warning() {
    let mut outcome = ScanOutcome::default();
    collect_candidates(
        Path::new("/src/odd.7z"),
        vec!["garbage".to_string(), "Fine Game (U) [!].gba".to_string()],
        &GoodTools,
        &mut outcome,
    );
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.groups["/src/odd.7z"].len(), 1);
}

#[test]
fn scan_matches_extensions_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Super Game (USA).zip"), b"").unwrap();
    fs::write(dir.path().join("Other Game (USA).ZIP"), b"").unwrap();
    fs::write(dir.path().join("Ignored Game (USA).7z"), b"").unwrap();
    fs::write(dir.path().join("notes.txt"), b"").unwrap();

    let outcome = scan_collection(dir.path(), &NoIntro, &|_| {}).unwrap();
    assert_eq!(outcome.containers_scanned, 2);
    assert_eq!(outcome.groups.len(), 2);
}

#[test]
fn scan_visits_containers_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["Beta Game (USA).zip", "Alpha Game (USA).zip"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    let seen = std::cell::RefCell::new(Vec::new());
    scan_collection(dir.path(), &NoIntro, &|container| {
        seen.borrow_mut().push(container.to_path_buf());
    })
    .unwrap();
    assert_eq!(
        *seen.borrow(),
        vec![
            dir.path().join("Alpha Game (USA).zip"),
            dir.path().join("Beta Game (USA).zip"),
        ]
    );
}

#[test]
fn unreadable_source_directory_is_fatal() {
    assert!(scan_collection(Path::new("/no/such/dir"), &NoIntro, &|_| {}).is_err());
}

#[test]
fn unreadable_container_is_a_warning_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bogus.7z"), b"not an archive").unwrap();
    let outcome = scan_collection(dir.path(), &GoodTools, &|_| {}).unwrap();
    assert!(outcome.groups.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
}
