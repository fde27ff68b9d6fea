use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

/// A single external tool call: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external tools and keeps a record of every invocation.
///
/// In dry-run mode invocations are recorded and printed but nothing is
/// spawned.
pub struct Runner {
    dry_run: bool,
    invocations: Vec<Invocation>,
}

impl Runner {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            invocations: Vec::new(),
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run an advisory tool, waiting for it to exit.
    ///
    /// These calls rebuild caches that can be regenerated later, so a missing
    /// tool or nonzero exit is logged and swallowed.
    pub fn run_best_effort(&mut self, program: &str, args: &[&OsStr]) {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_os_string()).collect(),
        };

        if self.dry_run {
            println!("  would run: {}", invocation);
            self.invocations.push(invocation);
            return;
        }

        let mut cmd = Command::new(program);
        cmd.args(args);

        match cmd.status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                log::warn!(
                    "{} exited with code {:?} (ignored)",
                    invocation,
                    status.code()
                );
            }
            Err(e) => {
                log::warn!("Failed to run {}: {} (ignored)", invocation, e);
            }
        }

        self.invocations.push(invocation);
    }

    /// Every invocation recorded so far, in call order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }
}
