use crate::types::DumpEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write every entry under `root`, creating missing parent directories.
///
/// Entries land in dump order, so a path that appears twice ends up holding
/// the later content. The first I/O failure aborts the remaining entries;
/// files already written stay on disk.
pub fn write_files(files: &[DumpEntry], root: &Path) -> Result<()> {
    for entry in files {
        let target = root.join(&entry.rel_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(&target, &entry.content)
            .with_context(|| format!("writing {}", target.display()))?;
        println!("[WRITE] {}", target.display());
    }
    Ok(())
}
