use std::fs;
use std::path::Path;

use crate::error::DocfindError;

use super::types::DocIndex;

/// Read and parse the index file.
///
/// Unreadable or syntactically invalid files are hard errors (reported
/// before the terminal UI starts). Content-level problems are tolerated:
/// mismatched parallel-array lengths are truncated to the shorter prefix so
/// they surface as missing entries, not as failures.
pub fn load_index(path: &Path) -> Result<DocIndex, DocfindError> {
    if !path.exists() {
        return Err(DocfindError::IndexNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;

    let mut index: DocIndex = serde_json::from_str(&contents)
        .map_err(|e| DocfindError::InvalidIndex(e.to_string()))?;

    normalize(&mut index);

    Ok(index)
}

fn normalize(index: &mut DocIndex) {
    let modules_mismatched = index.modules.truncate_to_shorter();
    let pages_mismatched = index.pages.truncate_to_shorter();

    #[cfg(debug_assertions)]
    {
        if modules_mismatched {
            log::warn!(
                "module index/data length mismatch, truncated to {} entries",
                index.modules.len()
            );
        }
        if pages_mismatched {
            log::warn!(
                "page index/data length mismatch, truncated to {} entries",
                index.pages.len()
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = (modules_mismatched, pages_mismatched);
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
