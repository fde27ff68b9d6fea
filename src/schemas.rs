use std::path::Path;

use crate::paths;
use crate::runner::Runner;

/// Compile the GSettings schema directory into its binary cache.
///
/// Best-effort: the cache is advisory and glib-compile-schemas failures do
/// not abort the remaining steps.
pub fn compile(prefix: &Path, runner: &mut Runner) {
    println!("Compiling GSettings schemas...");

    let schema_dir = paths::schema_dir(prefix);
    runner.run_best_effort("glib-compile-schemas", &[schema_dir.as_os_str()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_compile_invokes_schema_compiler_once() {
        let mut runner = Runner::new(true);
        compile(Path::new("/tmp/root"), &mut runner);

        assert_eq!(runner.invocations().len(), 1);
        let invocation = &runner.invocations()[0];
        assert_eq!(invocation.program, "glib-compile-schemas");
        assert_eq!(
            invocation.args,
            vec![PathBuf::from("/tmp/root/share/glib-2.0/schemas").into_os_string()]
        );
    }
}
