use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;

use super::table::read_table;
use super::{Compression, InputError, load_dataset, resolve_input};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("robogap_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), GzLevel::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_resolve_input_defaults() {
    let csv = resolve_input(Path::new("ROBO-GAP_dataset.csv"), None);
    assert_eq!(csv.delimiter, b',');
    assert_eq!(csv.compression, Compression::Plain);

    let tsv_gz = resolve_input(Path::new("data/robots.tsv.gz"), None);
    assert_eq!(tsv_gz.delimiter, b'\t');
    assert_eq!(tsv_gz.compression, Compression::Gzip);

    let explicit = resolve_input(Path::new("robots.tsv"), Some(b';'));
    assert_eq!(explicit.delimiter, b';');
}

#[test]
fn test_load_csv() {
    let dir = make_temp_dir();
    let path = dir.join("data.csv");
    write_file(
        &path,
        "robot,gender_category\nPepper,neutral\nSophia,feminine\nAtlas,masculine\n",
    );
    let ds = load_dataset(&resolve_input(&path, None)).unwrap();
    assert_eq!(ds.columns, vec!["robot", "gender_category"]);
    assert_eq!(ds.n_rows(), 3);
    let values: Vec<&str> = ds.column("gender_category").unwrap().collect();
    assert_eq!(values, vec!["neutral", "feminine", "masculine"]);
}

#[test]
fn test_load_gzipped_tsv() {
    let dir = make_temp_dir();
    let path = dir.join("data.tsv.gz");
    write_gz(&path, "robot\tgender_category\nNao\tneutral\nAsimo\tmasculine\n");
    let ds = load_dataset(&resolve_input(&path, None)).unwrap();
    assert_eq!(ds.n_rows(), 2);
    assert_eq!(ds.column_index("gender_category"), Some(1));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = make_temp_dir();
    let path = dir.join("ROBO-GAP_dataset.csv");
    let err = load_dataset(&resolve_input(&path, None)).unwrap_err();
    assert!(matches!(err, InputError::NotFound(ref p) if p == &path));
    let msg = err.to_string();
    assert!(msg.starts_with("Sorry, I couldn't find '"));
    assert!(msg.contains("ROBO-GAP_dataset.csv"));
}

#[test]
fn test_open_missing_file_maps_to_not_found() {
    let dir = make_temp_dir();
    let path = dir.join("absent.csv.gz");
    let err = super::reader::open_input(&path, Compression::Gzip).err().unwrap();
    assert!(matches!(err, InputError::NotFound(ref p) if p == &path));
}

#[test]
fn test_directory_path_is_not_found() {
    let dir = make_temp_dir();
    let err = load_dataset(&resolve_input(&dir, None)).unwrap_err();
    assert!(matches!(err, InputError::NotFound(_)));
}

#[test]
fn test_bom_is_stripped_from_first_header() {
    let data = "\u{feff}gender_category,robot\nfeminine,Erica\n";
    let ds = read_table(data.as_bytes(), b',').unwrap();
    assert_eq!(ds.columns[0], "gender_category");
}

#[test]
fn test_empty_input_is_parse_error() {
    let err = read_table("".as_bytes(), b',').unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_wide_row_is_parse_error() {
    let err = read_table("a,b\n1,2\n1,2,3\n".as_bytes(), b',').unwrap_err();
    match err {
        InputError::Parse(msg) => {
            assert!(msg.contains("line 3"), "{msg}");
            assert!(msg.contains("found 3"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_short_row_reads_missing_cells_as_empty() {
    let data = "robot,gender_category,notes\nA,masculine\nB,feminine,x\nC\n";
    let ds = read_table(data.as_bytes(), b',').unwrap();
    assert_eq!(ds.n_rows(), 3);
    let values: Vec<&str> = ds.column("gender_category").unwrap().collect();
    assert_eq!(values, vec!["masculine", "feminine", ""]);
    let notes: Vec<&str> = ds.column("notes").unwrap().collect();
    assert_eq!(notes, vec!["", "x", ""]);
}

#[test]
fn test_header_only_has_no_rows() {
    let ds = read_table("robot,gender_category\n".as_bytes(), b',').unwrap();
    assert_eq!(ds.n_rows(), 0);
    assert_eq!(ds.column("gender_category").unwrap().count(), 0);
    assert!(ds.column("missing").is_none());
}
