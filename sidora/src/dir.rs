use std::path::{Path, PathBuf};

use crate::config::DEFAULT_FILE_NAME;
use crate::logger::LOG_FILE_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct SidoraDirectory(PathBuf);

impl SidoraDirectory {
    pub fn new(p: PathBuf) -> Self {
        SidoraDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SidoraDirectory::new)
    }
}

impl SidoraDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
    pub fn log_path(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
}

// Get the absolute path to the sidora configuration folder.
///
/// This a "Sidora" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.sidora`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".sidora");

        #[cfg(not(target_os = "linux"))]
        path.push("Sidora");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SidoraDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        assert_eq!(dir.config_path(), tmp.path().join("a/b/sidora.toml"));
        assert_eq!(dir.log_path(), tmp.path().join("a/b/sidora.log"));
    }
}
