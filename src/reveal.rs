//! "Reveal in file manager" OS collaborator.

use std::path::Path;

use tracing::warn;

/// Opens `path` in the platform file manager. Fire and forget: launch errors
/// are logged, never propagated.
pub fn reveal_in_file_manager(path: &Path) {
    if let Err(e) = open::that_detached(path) {
        warn!("Could not open {} in the file manager: {}", path.display(), e);
    }
}
