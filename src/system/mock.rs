//! Mock system implementation for testing

use super::System;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` keeps files, directories and console output in memory, so
/// logger tests run without touching the terminal or the disk. Clones share
/// the same state.
///
/// # Example
/// ```
/// use consolekit::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/logs/run.txt", b"first\n").unwrap();
///
/// system.append(Path::new("/logs/run.txt"), b"second\n").unwrap();
/// system.write_console("hello").unwrap();
///
/// assert_eq!(system.read_to_string(Path::new("/logs/run.txt")).unwrap(), "first\nsecond\n");
/// assert_eq!(system.console_lines(), vec!["hello".to_owned()]);
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_exe: PathBuf,
    console: Vec<String>,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    ///
    /// The executable lives at `/app/bin/app`.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_exe: PathBuf::from("/app/bin/app"),
                console: Vec::new(),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set the executable path (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_current_exe<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.write_state()?;
        state.current_exe = path.as_ref().to_path_buf();
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self.write_state()?;

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.write_state()?;
        Self::ensure_parent_dirs(&mut state.dirs, path.as_ref());
        drop(state);
        Ok(self)
    }

    /// Lines written to the console so far
    #[must_use]
    #[inline]
    pub fn console_lines(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.console.clone())
            .unwrap_or_default()
    }

    /// Paths of every file in the mock filesystem, sorted
    #[must_use]
    #[inline]
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .state
            .read()
            .map(|state| state.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    fn read_state(&self) -> io::Result<RwLockReadGuard<'_, MockSystemState>> {
        self.state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn write_state(&self) -> io::Result<RwLockWriteGuard<'_, MockSystemState>> {
        self.state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_exe(&self) -> io::Result<PathBuf> {
        Ok(self.read_state()?.current_exe.clone())
    }

    #[inline]
    fn write_console(&self, line: &str) -> io::Result<()> {
        self.write_state()?.console.push(line.to_owned());
        Ok(())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.read_state()?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.write_state()?;

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }

        state
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(contents);
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.write_state()?;

        if let Some(file) = path.ancestors().find(|p| state.files.contains_key(*p)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Not a directory: {}", file.display()),
            ));
        }

        Self::ensure_parent_dirs(&mut state.dirs, path);
        drop(state);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.read_state()
            .is_ok_and(|state| state.files.contains_key(path) || state.dirs.contains(path))
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.read_state()
            .is_ok_and(|state| state.dirs.contains(path))
    }

    #[inline]
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.read_state()?;

        if !state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", path.display()),
            ));
        }

        let mut entries: Vec<PathBuf> = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .cloned()
            .collect();
        drop(state);

        entries.sort();
        Ok(entries)
    }
}
