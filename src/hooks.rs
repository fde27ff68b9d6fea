use anyhow::Result;

use crate::desktop;
use crate::icons;
use crate::install_env::InstallEnv;
use crate::runner::Runner;
use crate::schemas;

/// Which post-install steps to run after the schema compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Rename the per-size MIME-type icons.
    Icons,
    /// Refresh the icon cache and desktop database.
    Caches,
    /// Everything: renames plus cache refreshes.
    All,
}

/// Run one post-install hook variant.
///
/// Staged installs (DESTDIR set and non-empty) skip every step: no subprocess
/// is spawned and no file is touched. Live installs always compile the schema
/// cache first, then run the variant steps in order.
pub fn run(hook: Hook, env: &InstallEnv, runner: &mut Runner) -> Result<()> {
    if env.is_staged() {
        println!("DESTDIR is set, skipping post-install steps (staged install)");
        return Ok(());
    }

    schemas::compile(env.prefix(), runner);

    if matches!(hook, Hook::Icons | Hook::All) {
        icons::rename_mime_icons(env.prefix(), runner.is_dry_run())?;
    }

    if matches!(hook, Hook::Caches | Hook::All) {
        icons::update_cache(env.prefix(), runner);
        desktop::update_database(env.prefix(), runner);
    }

    Ok(())
}
