use std::fs;
use std::io;
use std::path::Path;

/// Maximum manifest size accepted for extraction (100 MB)
/// Larger files are refused instead of being buffered in memory
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A missing path is not an error here; callers that write new files rely on that.
pub fn validate_not_symlink(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            ),
        )),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Validates that a manifest path exists and is a regular file
///
/// Returns the file size on success. The `io::Error` from a failed metadata
/// lookup (e.g. `NotFound`) is returned unchanged.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `MAX_FILE_SIZE`
pub fn validate_manifest_file(path: &Path) -> io::Result<u64> {
    let metadata = fs::symlink_metadata(path)?;

    if metadata.is_symlink() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            ),
        ));
    }

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> io::Result<()> {
    if file_size > max_size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                max_size
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_manifest_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("go.mod");
        fs::write(&file_path, "module example.com/app\n").unwrap();

        let size = validate_manifest_file(&file_path).unwrap();
        assert_eq!(size, 23);
    }

    #[test]
    fn test_validate_manifest_file_missing_keeps_kind() {
        let path = PathBuf::from("/nonexistent/go.mod");
        let err = validate_manifest_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_validate_manifest_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_manifest_file(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_manifest_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("Cargo.lock");
        fs::write(&target, "").unwrap();
        let link = temp_dir.path().join("link.lock");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_manifest_file(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert!(validate_not_symlink(&link).is_err());
        assert!(validate_not_symlink(&target).is_ok());
    }

    #[test]
    fn test_validate_not_symlink_missing_path_is_ok() {
        assert!(validate_not_symlink(Path::new("/nonexistent/out.json")).is_ok());
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/file.txt");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
