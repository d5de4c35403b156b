use super::*;

#[test]
fn written_container_lists_and_extracts_its_entry() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Super Game (U) [!].gba");
    fs::write(&source, b"rom bytes").unwrap();

    let container = dir.path().join("Super Game (U) [!].7z");
    write_single_entry(&container, &source, "Super Game (U) [!].gba").unwrap();
    assert_eq!(
        list_entries(&container).unwrap(),
        vec!["Super Game (U) [!].gba"]
    );

    let out = tempfile::tempdir().unwrap();
    let extracted = extract_entry(&container, "Super Game (U) [!].gba", out.path()).unwrap();
    assert_eq!(fs::read(&extracted).unwrap(), b"rom bytes");
}

#[test]
fn extracts_a_later_entry_without_touching_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let staged_a = dir.path().join("a.gba");
    let staged_b = dir.path().join("b.gba");
    fs::write(&staged_a, b"first").unwrap();
    fs::write(&staged_b, b"second").unwrap();

    let container = dir.path().join("pair.7z");
    let mut writer = SevenZWriter::create(&container).unwrap();
    for (staged, name) in [(&staged_a, "a.gba"), (&staged_b, "b.gba")] {
        writer
            .push_archive_entry(
                SevenZArchiveEntry::from_path(staged, name.to_string()),
                Some(fs::File::open(staged).unwrap()),
            )
            .unwrap();
    }
    writer.finish().unwrap();

    let out = tempfile::tempdir().unwrap();
    let extracted = extract_entry(&container, "b.gba", out.path()).unwrap();
    assert_eq!(fs::read(&extracted).unwrap(), b"second");
    assert!(!out.path().join("a.gba").exists());
}

#[test]
fn extracting_an_absent_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.gba");
    fs::write(&source, b"x").unwrap();
    let container = dir.path().join("a.7z");
    write_single_entry(&container, &source, "a.gba").unwrap();

    let result = extract_entry(&container, "b.gba", dir.path());
    assert!(matches!(result, Err(PruneError::MissingEntry { .. })));
}

#[test]
fn listing_a_non_archive_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.7z");
    fs::write(&bogus, b"not an archive").unwrap();
    assert!(matches!(
        list_entries(&bogus),
        Err(PruneError::ArchiveRead { .. })
    ));
}

#[test]
fn listing_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        list_entries(&dir.path().join("absent.7z")),
        Err(PruneError::Io(_))
    ));
}
