use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files, if one exists.
static DATA_ROOT: LazyLock<Option<PathBuf>> = LazyLock::new(detect_data_root);

/// Path to a data file on disk, or None when no data directory was found.
///
/// The engine falls back to its bundled copies when this returns None or the file is absent.
pub fn data_path(relative: impl AsRef<Path>) -> Option<PathBuf> {
    DATA_ROOT
        .as_ref()
        .map(|root| root.join(relative))
        .filter(|path| path.is_file())
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("dunnet_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("dunnet_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("dunnet_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates.into_iter().find(|candidate| candidate.is_dir())
}
