use std::ffi::OsStr;
use std::path::Path;

use crate::paths;
use crate::runner::Runner;

/// Refresh the desktop entry database (best-effort).
pub fn update_database(prefix: &Path, runner: &mut Runner) {
    println!("Updating desktop database...");

    let applications = paths::applications_dir(prefix);
    runner.run_best_effort(
        "update-desktop-database",
        &[OsStr::new("-q"), applications.as_os_str()],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_database_invocation() {
        let mut runner = Runner::new(true);
        update_database(Path::new("/tmp/root"), &mut runner);

        assert_eq!(runner.invocations().len(), 1);
        assert_eq!(
            runner.invocations()[0].to_string(),
            "update-desktop-database -q /tmp/root/share/applications"
        );
    }
}
