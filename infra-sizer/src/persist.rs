use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::ExportError;

/// Write `contents` to `destination` so that it either appears complete or
/// not at all.
///
/// The bytes go to a temporary file next to `destination`, which is then
/// renamed over it. On any failure the temporary file is removed and an
/// existing file at `destination` is left untouched.
///
/// A new file gets the same mode as one made by `fs::write` (umask applies);
/// a replaced file keeps its permissions.
pub fn write_atomically(destination: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = temp_file_in(dir)?;
    if let Ok(existing) = fs::metadata(destination) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(destination).map_err(|err| err.error)?;

    debug!(destination = %destination.display(), bytes = contents.len(), "document written");
    Ok(())
}

fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".infra-sizer");

    // tempfile defaults to 0600; 0666 is narrowed by the umask at open time
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        write_atomically(&path, b"hello").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = write_atomically(&path, b"hello").unwrap_err();

        assert!(matches!(err, ExportError::Io(_)));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_mode_matches_plain_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let atomic = dir.path().join("atomic.txt");
        let plain = dir.path().join("plain.txt");

        write_atomically(&atomic, b"x").unwrap();
        std::fs::write(&plain, b"x").unwrap();

        let mode = |path: &Path| {
            std::fs::metadata(path).unwrap().permissions().mode() & 0o777
        };
        assert_eq!(mode(atomic.as_path()), mode(plain.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn replaced_file_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_atomically(&path, b"new").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
