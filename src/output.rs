//! Writing minted artifacts to disk.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Error;

/// Create or truncate `path` and write `bytes` to it verbatim. The data is synced to disk
/// before returning.
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let file = open(path, &mut OpenOptions::new())?;
    write_all(path, file, bytes)
}

/// Like [`write_file`], but restricts the file to its owner. Used for private keys.
pub fn write_secret(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = open(path, &mut options)?;

    // mode only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|source| io_error(path, source))?;
    }

    write_all(path, file, bytes)
}

fn open(path: &Path, options: &mut OpenOptions) -> Result<File, Error> {
    options
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| io_error(path, source))
}

fn write_all(path: &Path, mut file: File, bytes: &[u8]) -> Result<(), Error> {
    file.write_all(bytes)
        .and_then(|_| file.sync_all())
        .map_err(|source| io_error(path, source))?;
    trace!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
