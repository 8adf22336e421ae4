//! Command line tokenizing
//!
//! A line is split on runs of whitespace; the first token selects the
//! command and the rest are passed through untouched. There is no quoting,
//! globbing, variable expansion or redirection.

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: String,
    pub args: Vec<String>,
}

/// Split a raw line into verb and arguments.
///
/// Returns `None` for empty or whitespace-only input, which the shell
/// treats as a no-op.
pub fn parse_command_line(line: &str) -> Option<CommandLine> {
    let mut tokens = line.split_whitespace().map(String::from);
    let verb = tokens.next()?;
    Some(CommandLine {
        verb,
        args: tokens.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_and_args() {
        let parsed = parse_command_line("echo one two").unwrap();
        assert_eq!(parsed.verb, "echo");
        assert_eq!(parsed.args, vec!["one", "two"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let parsed = parse_command_line("  cd \t /docs/   ").unwrap();
        assert_eq!(parsed.verb, "cd");
        assert_eq!(parsed.args, vec!["/docs/"]);
    }

    #[test]
    fn test_no_args() {
        let parsed = parse_command_line("ls").unwrap();
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command_line(""), None);
        assert_eq!(parse_command_line("   \t  "), None);
    }

    #[test]
    fn test_quotes_are_not_special() {
        let parsed = parse_command_line("echo \"a b\"").unwrap();
        assert_eq!(parsed.args, vec!["\"a", "b\""]);
    }
}
