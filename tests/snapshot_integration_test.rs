use skipstore::{DeleteOutcome, InsertOutcome, SkipList};

#[test]
fn test_dump_writes_sorted_lines() {
    let mut list = SkipList::new(16);
    list.insert(7, "b".to_string());
    list.insert(1, "a".to_string());
    list.insert(3, "c".to_string());

    let mut buffer = Vec::new();
    let written = list.dump(&mut buffer).unwrap();
    assert_eq!(written, 3);
    assert_eq!(String::from_utf8(buffer).unwrap(), "1:a\n3:c\n7:b\n");
}

#[test]
fn test_roundtrip_into_fresh_list() {
    let mut original = SkipList::with_seed(16, 11);
    for key in [42, 7, 19, 3, 88] {
        original.insert(key, format!("value_{}", key));
    }

    let mut buffer = Vec::new();
    original.dump(&mut buffer).unwrap();

    // A different seed gives a different level structure, but the key/value
    // set must round-trip exactly.
    let mut restored: SkipList<i32, String> = SkipList::with_seed(16, 99);
    let stats = restored.load(buffer.as_slice()).unwrap();
    assert_eq!(stats.inserted, 5);
    assert_eq!(stats.duplicates, 0);
    assert_eq!(stats.skipped, 0);

    assert_eq!(restored.len(), original.len());
    for key in [42, 7, 19, 3, 88] {
        assert_eq!(restored.search(&key), Some(&format!("value_{}", key)));
    }
}

#[test]
fn test_load_is_idempotent() {
    let mut list: SkipList<i32, String> = SkipList::new(16);
    list.insert(1, "a".to_string());
    list.insert(2, "b".to_string());

    let mut buffer = Vec::new();
    list.dump(&mut buffer).unwrap();

    let first = list.load(buffer.as_slice()).unwrap();
    assert_eq!(first.inserted, 0);
    assert_eq!(first.duplicates, 2);
    assert_eq!(list.len(), 2);

    // Loading is additive, never clearing: values are still the originals.
    assert_eq!(list.search(&1), Some(&"a".to_string()));
    assert_eq!(list.search(&2), Some(&"b".to_string()));
}

#[test]
fn test_load_merges_into_existing_state() {
    let mut list: SkipList<i32, String> = SkipList::new(16);
    list.insert(1, "kept".to_string());

    let snapshot = "1:overwritten\n2:new\n";
    let stats = list.load(snapshot.as_bytes()).unwrap();
    assert_eq!(stats.inserted, 1);
    assert_eq!(stats.duplicates, 1);

    // The duplicate record did not overwrite the stored value.
    assert_eq!(list.search(&1), Some(&"kept".to_string()));
    assert_eq!(list.search(&2), Some(&"new".to_string()));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let input = "\n\
        1:a\n\
        no_delimiter\n\
        not_a_number:oops\n\
        2:b\n\
        \n\
        3:c\n";

    let mut list: SkipList<i32, String> = SkipList::new(16);
    let stats = list.load(input.as_bytes()).unwrap();

    assert_eq!(stats.inserted, 3);
    assert_eq!(stats.skipped, 4);
    assert_eq!(list.len(), 3);
    assert_eq!(list.search(&2), Some(&"b".to_string()));
}

#[test]
fn test_value_keeps_extra_delimiters() {
    // Split happens on the first delimiter only.
    let mut list: SkipList<i32, String> = SkipList::new(16);
    list.load("1:a:b:c\n".as_bytes()).unwrap();
    assert_eq!(list.search(&1), Some(&"a:b:c".to_string()));
}

#[test]
fn test_dump_and_load_via_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump_file");

    let mut list = SkipList::new(16);
    for key in 0..100 {
        list.insert(key, format!("v{}", key));
    }
    let written = list.dump_to_path(&path).unwrap();
    assert_eq!(written, 100);

    let mut restored: SkipList<i32, String> = SkipList::new(16);
    let stats = restored.load_from_path(&path).unwrap();
    assert_eq!(stats.inserted, 100);
    assert_eq!(restored.len(), 100);
    assert_eq!(restored.search(&37), Some(&"v37".to_string()));
}

#[test]
fn test_load_from_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut list: SkipList<i32, String> = SkipList::new(16);
    assert!(list.load_from_path(dir.path().join("absent")).is_err());
}

#[test]
fn test_insert_search_delete_dump_scenario() {
    let mut list = SkipList::new(16);

    assert_eq!(list.insert(1, "a".to_string()), InsertOutcome::Inserted);
    assert_eq!(list.insert(7, "b".to_string()), InsertOutcome::Inserted);
    assert_eq!(list.insert(3, "c".to_string()), InsertOutcome::Inserted);
    assert_eq!(list.insert(7, "z".to_string()), InsertOutcome::AlreadyExists);
    assert_eq!(list.len(), 3);

    assert_eq!(list.search(&7), Some(&"b".to_string()));
    assert_eq!(list.delete(&3), DeleteOutcome::Deleted);
    assert!(list.search(&3).is_none());

    let mut buffer = Vec::new();
    list.dump(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "1:a\n7:b\n");
}
