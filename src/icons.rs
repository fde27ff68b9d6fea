use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::paths;
use crate::runner::Runner;

/// Rename the per-size MIME-type icons from the application id to the icon
/// name the desktop environment resolves for the file type.
///
/// A missing source icon is a packaging defect and propagates immediately.
/// There is no rollback: a failure leaves the tree partially renamed.
pub fn rename_mime_icons(prefix: &Path, dry_run: bool) -> Result<()> {
    println!("Renaming MIME-type icons...");

    for size in paths::ICON_SIZES {
        let dir = paths::mimetypes_dir(prefix, size);
        let src = dir.join(paths::APP_ICON);
        let dst = dir.join(paths::MIME_ICON);

        if dry_run {
            println!("  would rename: {} -> {}", src.display(), dst.display());
            continue;
        }

        fs::rename(&src, &dst)
            .with_context(|| format!("Failed to rename {}", src.display()))?;

        log::debug!("Renamed {} -> {}", src.display(), dst.display());
        println!("  ✓ {}/{}", size, paths::MIME_ICON);
    }

    Ok(())
}

/// Refresh the hicolor icon cache (best-effort).
pub fn update_cache(prefix: &Path, runner: &mut Runner) {
    println!("Updating icon cache...");

    let hicolor = paths::hicolor_dir(prefix);
    runner.run_best_effort(
        "gtk-update-icon-cache",
        &[OsStr::new("-qtf"), hicolor.as_os_str()],
    );
}

/// Check that every post-rename icon is present under the prefix.
///
/// Read-only packaging sanity check: no subprocess calls, no mutation.
pub fn verify(prefix: &Path) -> Result<()> {
    println!("Checking MIME-type icons under {}...", prefix.display());

    let mut missing = 0;

    for size in paths::ICON_SIZES {
        let icon = paths::mimetypes_dir(prefix, size).join(paths::MIME_ICON);

        if icon.is_file() {
            println!("  ✓ {}/{}", size, paths::MIME_ICON);
        } else {
            println!("  ✗ {}/{} not found", size, paths::MIME_ICON);
            missing += 1;
        }
    }

    if missing > 0 {
        anyhow::bail!("{} MIME-type icon(s) missing", missing);
    }

    println!("All MIME-type icons present");
    Ok(())
}
