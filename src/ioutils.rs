use std::path::Path;

use crate::error::{Error, Result};

/// Whether `path` is occupied: an existing file, or a directory with entries.
pub fn already_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        let mut entries = std::fs::read_dir(path).map_err(Error::IoError)?;
        return Ok(entries.next().is_some());
    }
    Ok(path.exists())
}

/// Fails with `AlreadyExists` when `path` is occupied.
pub fn ensure_available<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if already_exists(path)? {
        return Err(Error::AlreadyExists { path: path.display().to_string() });
    }
    Ok(())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_directory_is_available() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!already_exists(tmp.path()).unwrap());
        assert!(ensure_available(tmp.path()).is_ok());
        assert!(!already_exists(tmp.path().join("missing")).unwrap());
    }

    #[test]
    fn files_and_populated_directories_are_occupied() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(already_exists(&file).unwrap());
        assert!(already_exists(tmp.path()).unwrap());
        assert!(matches!(ensure_available(&file), Err(Error::AlreadyExists { .. })));
    }

    #[test]
    fn write_file_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("a/b/c.txt");
        write_file("hello", &dest).unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "hello");
    }

    #[test]
    fn reads_everything_from_reader() {
        assert_eq!(read_from("{\"a\": 1}".as_bytes()).unwrap(), "{\"a\": 1}");
    }
}
