//! Location of the reference files.
//!
//! The checklist and its lookup tables live together in one config directory.
//! It is found by checking, in order:
//!
//! 1. a `config_directory.txt` file in the working directory whose first line
//!    names an existing directory
//! 2. the `TAXON_SOLVER_CONFIG` environment variable
//! 3. well-known directories in the user's home directory

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Environment variable naming the config directory
pub const CONFIG_ENV: &str = "TAXON_SOLVER_CONFIG";

/// Pointer file read from the working directory
pub const POINTER_FILE: &str = "config_directory.txt";

/// Directory names tried under the home directory
pub const HOME_CANDIDATES: [&str; 4] = [
    "TAXON_SOLVER_CONFIG",
    ".TAXON_SOLVER_CONFIG",
    "taxon_solver_config",
    ".taxon_solver_config",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found: set {CONFIG_ENV} or create ~/taxon_solver_config")]
    DirectoryNotFound,

    #[error("Config directory does not exist: {0}")]
    NoSuchDirectory(PathBuf),

    #[error("Config file {name} not found in {dir}")]
    FileNotFound { name: &'static str, dir: PathBuf },
}

/// The reference files kept in the config directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFile {
    Translation,
    Whitelist,
    Checklist,
    RedList,
}

impl ConfigFile {
    /// File name inside the config directory
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Translation => "translate_to_dyntaxa.txt",
            Self::Whitelist => "dyntaxa_whitelist.txt",
            Self::Checklist => "Taxon.csv",
            Self::RedList => "red_list_species.txt",
        }
    }

    /// Sub-directory holding the file, if any
    #[must_use]
    pub fn subdir(self) -> Option<&'static str> {
        match self {
            Self::Checklist => Some("dyntaxa_dwca"),
            _ => None,
        }
    }
}

/// A resolved config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDirectory {
    root: PathBuf,
}

impl ConfigDirectory {
    /// Use `root` as the config directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoSuchDirectory` if `root` is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ConfigError::NoSuchDirectory(root));
        }
        Ok(Self { root })
    }

    /// Find the config directory from the working directory, environment and
    /// home directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DirectoryNotFound` if no candidate exists.
    pub fn discover() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().ok();
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::discover_from(cwd.as_deref(), env.as_deref(), dirs::home_dir().as_deref())
    }

    /// Discovery with every input explicit
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DirectoryNotFound` if no candidate exists.
    pub fn discover_from(
        cwd: Option<&Path>,
        env: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(dir) = cwd.and_then(read_pointer_file) {
            debug!("Config directory from {POINTER_FILE}: {}", dir.display());
            return Ok(Self { root: dir });
        }

        if let Some(dir) = env.filter(|d| d.is_dir()) {
            debug!("Config directory from {CONFIG_ENV}: {}", dir.display());
            return Ok(Self {
                root: dir.to_path_buf(),
            });
        }

        if let Some(home) = home {
            for name in HOME_CANDIDATES {
                let dir = home.join(name);
                if dir.is_dir() {
                    debug!("Config directory found at {}", dir.display());
                    return Ok(Self { root: dir });
                }
            }
        }

        Err(ConfigError::DirectoryNotFound)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `file`, which must exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if the file is missing.
    pub fn path(&self, file: ConfigFile) -> Result<PathBuf, ConfigError> {
        let mut path = self.root.clone();
        if let Some(subdir) = file.subdir() {
            path.push(subdir);
        }
        path.push(file.file_name());

        if path.is_file() {
            Ok(path)
        } else {
            Err(ConfigError::FileNotFound {
                name: file.file_name(),
                dir: self.root.clone(),
            })
        }
    }
}

fn read_pointer_file(cwd: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(cwd.join(POINTER_FILE)).ok()?;
    let line = content.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    let dir = PathBuf::from(line);
    dir.is_dir().then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_file_wins() {
        let cwd = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let env = tempfile::tempdir().unwrap();
        std::fs::write(
            cwd.path().join(POINTER_FILE),
            format!("{}\nignored\n", target.path().display()),
        )
        .unwrap();

        let dir =
            ConfigDirectory::discover_from(Some(cwd.path()), Some(env.path()), None).unwrap();
        assert_eq!(dir.root(), target.path());
    }

    #[test]
    fn test_pointer_to_missing_dir_falls_through() {
        let cwd = tempfile::tempdir().unwrap();
        let env = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join(POINTER_FILE), "/nonexistent/config\n").unwrap();

        let dir =
            ConfigDirectory::discover_from(Some(cwd.path()), Some(env.path()), None).unwrap();
        assert_eq!(dir.root(), env.path());
    }

    #[test]
    fn test_home_candidates() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join("taxon_solver_config")).unwrap();

        let dir = ConfigDirectory::discover_from(None, None, Some(home.path())).unwrap();
        assert_eq!(dir.root(), home.path().join("taxon_solver_config"));
    }

    #[test]
    fn test_nothing_found() {
        let home = tempfile::tempdir().unwrap();
        let result = ConfigDirectory::discover_from(
            None,
            Some(Path::new("/nonexistent/config")),
            Some(home.path()),
        );
        assert!(matches!(result, Err(ConfigError::DirectoryNotFound)));
    }

    #[test]
    fn test_file_paths() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("dyntaxa_dwca")).unwrap();
        std::fs::write(root.path().join("dyntaxa_dwca/Taxon.csv"), "").unwrap();

        let dir = ConfigDirectory::new(root.path()).unwrap();
        assert_eq!(
            dir.path(ConfigFile::Checklist).unwrap(),
            root.path().join("dyntaxa_dwca").join("Taxon.csv")
        );
        assert!(matches!(
            dir.path(ConfigFile::RedList),
            Err(ConfigError::FileNotFound {
                name: "red_list_species.txt",
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_missing_dir() {
        assert!(ConfigDirectory::new("/nonexistent/config").is_err());
    }
}
