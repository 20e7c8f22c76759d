//! Flat-file storage for login state, the device cache and the HTTP trace
//!
//! Everything lives in one per-user directory (`~/.remoteit` by default),
//! created with mode 0700. Records are written 0600 through a temp file and
//! rename so a crashed write never leaves a truncated cache behind.

mod http_log;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub use http_log::HttpLog;

type Result<T> = std::result::Result<T, StorageError>;

/// Name of the per-user directory under `$HOME`
const DIR_NAME: &str = ".remoteit";

/// Files managed by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageFile {
    /// Raw login response
    Login,
    /// Raw device list response (whole envelope)
    Devices,
    /// Append-only HTTP request/response trace
    HttpLog,
}

impl StorageFile {
    pub fn file_name(self) -> &'static str {
        match self {
            StorageFile::Login => "login",
            StorageFile::Devices => "devices",
            StorageFile::HttpLog => "http.log",
        }
    }
}

/// Byte-level record storage keyed by [`StorageFile`].
///
/// The session layer only talks to this trait so tests can substitute an
/// in-memory store and count reads.
pub trait RecordStore {
    /// Replace the record with `data`
    fn write_record(&self, file: StorageFile, data: &[u8]) -> Result<()>;

    /// Read the whole record, failing with [`StorageError::NotFound`] if absent
    fn read_record(&self, file: StorageFile) -> Result<Vec<u8>>;

    /// Whether the record is present
    fn exists(&self, file: StorageFile) -> bool;
}

/// Filesystem-backed store rooted at a single directory
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Default store directory (`~/.remoteit`)
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StorageError::NoHome)?;
        Ok(home.join(DIR_NAME))
    }

    /// Open the store at `dir`, creating the directory if needed
    pub fn open_at(dir: &Path) -> Result<Self> {
        create_private_dir(dir).map_err(|e| StorageError::from_io(dir.to_path_buf(), e))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a managed file
    pub fn path(&self, file: StorageFile) -> PathBuf {
        self.dir.join(file.file_name())
    }

    /// Delete a record. Returns `false` if it did not exist.
    pub fn remove_record(&self, file: StorageFile) -> Result<bool> {
        let path = self.path(file);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::from_io(path, e)),
        }
    }

    /// Open the HTTP trace file for appending
    pub fn http_log(&self) -> Result<HttpLog> {
        HttpLog::open(&self.path(StorageFile::HttpLog))
    }
}

impl RecordStore for Store {
    fn write_record(&self, file: StorageFile, data: &[u8]) -> Result<()> {
        let path = self.path(file);
        let tmp = self.dir.join(format!(".{}.tmp", file.file_name()));

        write_private_file(&tmp, data).map_err(|e| StorageError::from_io(tmp.clone(), e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::from_io(path.clone(), e))?;

        log::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn read_record(&self, file: StorageFile) -> Result<Vec<u8>> {
        let path = self.path(file);
        fs::read(&path).map_err(|e| StorageError::from_io(path, e))
    }

    fn exists(&self, file: StorageFile) -> bool {
        self.path(file).is_file()
    }
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(dir)
}

pub(crate) fn private_open_options() -> OpenOptions {
    let mut options = OpenOptions::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
}

fn write_private_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = private_open_options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
