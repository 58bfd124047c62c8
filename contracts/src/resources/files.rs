//! Artifact directory scanning, shared with `build.rs`. Only depends on std.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The regular files found in an artifact directory.
#[derive(Debug, Default)]
pub struct ArtifactFiles {
    /// `(name, path)` pairs, sorted by name
    pub files: Vec<(String, PathBuf)>,
    /// File names that are not valid UTF-8, so can never be looked up
    pub skipped: Vec<OsString>,
}

/// Scans `dir` for artifacts. A missing directory has no artifacts.
pub fn artifact_files(dir: &Path) -> io::Result<ArtifactFiles> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ArtifactFiles::default()),
        Err(e) => return Err(e),
    };

    let mut found = ArtifactFiles::default();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => found.files.push((name, entry.path())),
            Err(name) => found.skipped.push(name),
        }
    }
    found.files.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::artifact_files;

    #[test]
    fn missing_directory_is_empty() {
        let temp_dir = tempdir().unwrap();
        let found = artifact_files(&temp_dir.path().join("abi")).unwrap();
        assert!(found.files.is_empty());
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn finds_sorted_regular_files() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("b.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("a.json"), "[]").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let found = artifact_files(temp_dir.path()).unwrap();
        let names = found
            .files
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.json", "b.json"]);
        assert_eq!(found.files[0].1, temp_dir.path().join("a.json"));
    }

    #[cfg(unix)]
    #[test]
    fn reports_non_utf8_names() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("Token.json"), "[]").unwrap();
        fs::write(temp_dir.path().join(OsStr::from_bytes(b"Bad\xff.json")), "[]").unwrap();

        let found = artifact_files(temp_dir.path()).unwrap();
        assert_eq!(found.files.len(), 1);
        assert_eq!(found.files[0].0, "Token.json");
        assert_eq!(
            found.skipped,
            vec![OsString::from_vec(b"Bad\xff.json".to_vec())]
        );
    }
}
