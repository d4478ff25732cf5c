use std::path::{Path, PathBuf};

/// Logical layout of a catalog root on disk.
///
/// This does *not* perform any IO itself.
#[derive(Debug, Clone)]
pub struct CatalogLayout {
    /// Directory holding the source and output files.
    pub root: PathBuf,
    /// Directory for catalog metadata (.catalog).
    pub meta_dir: PathBuf,
    /// Path to the converter config file (JSON).
    pub config_path: PathBuf,
}

impl CatalogLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".catalog");
        let config_path = meta_dir.join("config.json");
        Self { root, meta_dir, config_path }
    }
}
