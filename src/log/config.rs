//! Logger configuration

use crate::options::OptionMap;
use crate::system::{RealSystem, System};
use std::path::{Path, PathBuf};

/// Name of the log directory created next to the executable
pub const DEFAULT_DIR_NAME: &str = "Log";

/// Option that overrides the log directory
pub const LOG_DIR_OPTION: &str = "logdir";
/// Switch that turns the console sink off
pub const NO_CONSOLE_OPTION: &str = "noconsole";
/// Switch that turns the file sink off
pub const NO_FILE_OPTION: &str = "nologfile";
/// Switch that turns console colors off
pub const NO_COLOR_OPTION: &str = "nocolor";

/// Which sinks a [`crate::log::Logger`] writes to, and where
///
/// Both sinks are on by default and the file sink writes into
/// `<executable dir>/Log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    console: bool,
    file: bool,
    color: bool,
    directory: PathBuf,
}

impl LogConfig {
    /// Create a configuration with both sinks on, writing files into `directory`
    #[must_use]
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            console: true,
            file: true,
            color: true,
            directory: directory.into(),
        }
    }

    /// Create the default configuration for the given system
    #[must_use]
    pub fn for_system(system: &dyn System) -> Self {
        Self::new(default_directory(system))
    }

    #[must_use]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file = enabled;
        self
    }

    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Override the log directory; an empty path leaves it unchanged
    #[must_use]
    pub fn with_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        let directory = directory.as_ref();
        if !directory.as_os_str().is_empty() {
            self.directory = directory.to_path_buf();
        }
        self
    }

    /// Apply the sink options a program was started with
    ///
    /// Recognizes `-logdir <dir>`, `-noconsole`, `-nologfile` and `-nocolor`.
    #[must_use]
    pub fn with_options(self, options: &OptionMap) -> Self {
        let mut config = self;
        if let Some(directory) = options.get_string(LOG_DIR_OPTION) {
            config = config.with_directory(directory);
        }
        if options.get_switch(NO_CONSOLE_OPTION) {
            config = config.with_console(false);
        }
        if options.get_switch(NO_FILE_OPTION) {
            config = config.with_file(false);
        }
        if options.get_switch(NO_COLOR_OPTION) {
            config = config.with_color(false);
        }
        config
    }

    #[must_use]
    pub const fn console(&self) -> bool {
        self.console
    }

    #[must_use]
    pub const fn file(&self) -> bool {
        self.file
    }

    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::for_system(&RealSystem)
    }
}

/// `Log` next to the running executable, or `./Log` if that cannot be found
#[must_use]
pub fn default_directory(system: &dyn System) -> PathBuf {
    system
        .current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}
