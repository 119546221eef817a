use std::fs;
use std::path::Path;

use wp2md_engine::{ensure_output_dir, output_dir_for, PostWriter, OUTPUT_DIR_NAME};
use tempfile::TempDir;

#[test]
fn output_dir_sits_next_to_the_input_file() {
    let dir = output_dir_for(Path::new("/exports/blog.xml"));
    assert_eq!(dir, Path::new("/exports").join(OUTPUT_DIR_NAME));
}

#[test]
fn creates_missing_output_dir_with_ancestors() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("a").join("markdown-posts");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());

    // Second call is a no-op.
    ensure_output_dir(&new_dir).unwrap();
}

#[test]
fn write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = PostWriter::new(temp.path().to_path_buf());

    let first = writer.write("post.md", "hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("post.md", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = PostWriter::new(file_path.clone());
    let result = writer.write("post.md", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("post.md").exists());
}
