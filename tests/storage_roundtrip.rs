use award_calendar::storage::{load_awards, save_awards};
use award_calendar::AwardRecord;
use tempfile::tempdir;

fn sample_awards() -> Vec<AwardRecord> {
    vec![
        AwardRecord::new("すばる文学賞", "2025-01-01", "2025-03-31", "30000～100000", "42000"),
        AwardRecord::new("新人賞, 第2回", "2025-05-01", "2025-07-31", "～50000", "0"),
        AwardRecord::new("\"引用\"賞", "", "未定", "", "abc"),
        AwardRecord::new("改行\nあり", "2025-05-01", "2025-07-31", "10,000-20,000", "  12 "),
    ]
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let awards = load_awards(dir.path().join("awards.csv")).unwrap();
    assert!(awards.is_empty());
}

#[test]
fn save_then_load_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("awards.csv");
    let awards = sample_awards();

    save_awards(&path, &awards).unwrap();
    let loaded = load_awards(&path).unwrap();

    assert_eq!(loaded.len(), awards.len());
    assert_eq!(loaded, awards);
}

#[test]
fn saved_file_has_no_header_and_quotes_delimiters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("awards.csv");
    save_awards(
        &path,
        &[AwardRecord::new("A, B", "2025-05-01", "2025-07-31", "30000～100000", "100")],
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert_eq!(content.trim_end(), "\"A, B\",2025-05-01,2025-07-31,30000～100000,100");
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("awards.csv");

    save_awards(&path, &sample_awards()).unwrap();
    save_awards(&path, &sample_awards()[..1]).unwrap();

    assert_eq!(load_awards(&path).unwrap(), sample_awards()[..1].to_vec());
}

#[test]
fn save_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("awards.csv");

    save_awards(&path, &sample_awards()).unwrap();
    assert_eq!(load_awards(&path).unwrap().len(), 4);
}

#[test]
fn load_pads_short_rows_and_trims_long_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("awards.csv");
    std::fs::write(&path, "短い賞,2025-05-01\n長い賞,a,b,c,d,余分\n").unwrap();

    let loaded = load_awards(&path).unwrap();
    assert_eq!(
        loaded,
        vec![
            AwardRecord::new("短い賞", "2025-05-01", "", "", ""),
            AwardRecord::new("長い賞", "a", "b", "c", "d"),
        ]
    );
}

#[test]
fn load_rejects_non_utf8_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("awards.csv");
    std::fs::write(&path, [0x82, 0xa0, b',', b'a', b'\n']).unwrap();

    assert!(load_awards(&path).is_err());
}
