//! System abstraction for console and filesystem operations
//!
//! The logger writes through this trait so its sinks can be exercised with
//! an in-memory implementation in tests.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the system operations the logger needs
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::io` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Process Operations ====================

    /// Path of the running executable
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// Write one line to the console
    fn write_console(&self, line: &str) -> io::Result<()>;

    // ==================== Filesystem Operations ====================

    /// Append bytes to a file, creating it if it doesn't exist
    ///
    /// The parent directory must already exist.
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    // ==================== Inspection Operations ====================
    // Reading back what the sinks wrote; `Logger::contents` and tests use these

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the paths of a directory's direct children
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}
