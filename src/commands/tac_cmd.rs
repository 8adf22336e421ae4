// src/commands/tac_cmd.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

/// Prints the lines of an archive entry last to first.
///
/// The path is an entry name, looked up verbatim; it is not joined with
/// the current directory.
pub struct TacCommand;

#[async_trait]
impl Command for TacCommand {
    fn name(&self) -> &'static str {
        "tac"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let path = ctx.args.first().map(String::as_str).unwrap_or("");

        let content = match ctx.fs.read_to_string(path).await {
            Ok(content) => content,
            Err(_) => {
                return CommandResult::error(format!("tac: {}: No such file\n", path));
            }
        };

        let mut output = String::with_capacity(content.len() + 1);
        for line in content.lines().rev() {
            output.push_str(line);
            output.push('\n');
        }

        CommandResult::success(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveEntry;
    use crate::fs::ArchiveFs;
    use std::sync::Arc;

    fn make_ctx(args: Vec<&str>) -> CommandContext {
        let fs = ArchiveFs::from_entries(vec![
            ArchiveEntry::new("/docs/readme.txt", b"hello\nworld".to_vec()),
            ArchiveEntry::new("abc.txt", b"a\nb\nc\n".to_vec()),
            ArchiveEntry::new("crlf.txt", b"one\r\ntwo\r\n".to_vec()),
            ArchiveEntry::new("blank.txt", b"x\n\ny\n".to_vec()),
            ArchiveEntry::new("empty.txt", Vec::new()),
        ]);
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            cwd: "/".to_string(),
            fs: Arc::new(fs),
        }
    }

    #[tokio::test]
    async fn test_tac_reverses_lines() {
        let result = TacCommand.execute(make_ctx(vec!["abc.txt"])).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "c\nb\na\n");
    }

    #[tokio::test]
    async fn test_tac_without_trailing_newline() {
        let result = TacCommand.execute(make_ctx(vec!["/docs/readme.txt"])).await;
        assert_eq!(result.stdout, "world\nhello\n");
    }

    #[tokio::test]
    async fn test_tac_crlf_lines() {
        let result = TacCommand.execute(make_ctx(vec!["crlf.txt"])).await;
        assert_eq!(result.stdout, "two\none\n");
    }

    #[tokio::test]
    async fn test_tac_keeps_blank_lines() {
        let result = TacCommand.execute(make_ctx(vec!["blank.txt"])).await;
        assert_eq!(result.stdout, "y\n\nx\n");
    }

    #[tokio::test]
    async fn test_tac_empty_file() {
        let result = TacCommand.execute(make_ctx(vec!["empty.txt"])).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "");
    }

    #[tokio::test]
    async fn test_tac_path_is_not_relative_to_cwd() {
        let mut ctx = make_ctx(vec!["readme.txt"]);
        ctx.cwd = "/docs/".to_string();
        let result = TacCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "tac: readme.txt: No such file\n");
    }

    #[tokio::test]
    async fn test_tac_file_not_found() {
        let result = TacCommand.execute(make_ctx(vec!["nonexistent.txt"])).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stdout, "");
        assert_eq!(result.stderr, "tac: nonexistent.txt: No such file\n");
    }

    #[tokio::test]
    async fn test_tac_without_argument() {
        let result = TacCommand.execute(make_ctx(vec![])).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "tac: : No such file\n");
    }
}
