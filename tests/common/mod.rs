#![allow(dead_code)]

use cask::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

const TMPDIR: &str = "target/playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Sharded path of the given content's object inside a repository.
pub fn object_path_for(repository_path: &Path, content: &[u8]) -> PathBuf {
    repository_path
        .join(".cask")
        .join("objects")
        .join(ObjectId::from_content(content).to_path())
}
