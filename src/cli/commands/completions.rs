//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::BacklogError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `BacklogError::Config` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, BacklogError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "backlog", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| BacklogError::Config(format!("Completion script is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("backlog"));
        assert!(script.contains("sprint"));
    }

    #[test]
    fn test_zsh_completions() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef backlog"));
    }
}
