//! Tokens command implementation.
//!
//! Scans each input file and prints the token stream, including the final
//! EOF token, as text or JSON.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use quillc_lex::{tokenize, Token};
use serde::Serialize;

use crate::commands::common::{error_messages, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::error::{QuilltError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input files to scan.
    pub input: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Include byte spans in text output.
    pub show_spans: bool,
}

/// One token as written to JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    /// Tag name, e.g. `LEFT_PAREN`.
    pub kind: &'static str,
    /// Source text, or the message of an error token.
    pub lexeme: &'a str,
    /// Line of the first character.
    pub line: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: token.lexeme,
            line: token.line,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// Tokens of one file as written to JSON output.
#[derive(Debug, Serialize)]
struct FileTokens<'a> {
    file: String,
    tokens: Vec<TokenRecord<'a>>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<String> {
        if self.args.input.is_empty() {
            return Err(QuilltError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let sources = self
            .args
            .input
            .iter()
            .map(|path| read_source(path).map(|source| (path.as_path(), source)))
            .collect::<Result<Vec<_>>>()?;

        match self.args.format {
            OutputFormat::Text => Ok(self.render_text(&sources)),
            OutputFormat::Json => self.render_json(&sources),
        }
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl TokensCommand {
    fn render_text(&self, sources: &[(&Path, String)]) -> String {
        let mut out = String::new();
        let with_headers = sources.len() > 1;

        for (path, source) in sources {
            if with_headers {
                let _ = writeln!(out, "==> {} <==", path.display());
            }
            let tokens = tokenize(source);
            tracing::debug!(path = %path.display(), tokens = tokens.len(), "scanned file");
            for token in &tokens {
                out.push_str(&format_token(token, self.args.show_spans));
                out.push('\n');
            }
        }

        out
    }

    fn render_json(&self, sources: &[(&Path, String)]) -> Result<String> {
        let files: Vec<FileTokens<'_>> = sources
            .iter()
            .map(|(path, source)| FileTokens {
                file: path.display().to_string(),
                tokens: tokenize(source).iter().map(TokenRecord::from).collect(),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&files)?)
    }
}

/// Formats a token as `<line> <KIND> <lexeme>` with control characters in
/// the lexeme escaped.
pub fn format_token(token: &Token<'_>, show_spans: bool) -> String {
    let mut line = format!(
        "{:>4} {:<20} {}",
        token.line,
        token.kind.name(),
        token.lexeme.escape_debug()
    );
    if show_spans {
        let _ = write!(line, " @{}..{}", token.span.start, token.span.end);
    }
    line.trim_end().to_string()
}

/// Run the tokens command and print its output.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    tracing::debug!(command = TokensCommand::name(), "running command");
    let output = command.execute()?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(input: Vec<PathBuf>, format: OutputFormat) -> TokensArgs {
        TokensArgs {
            input,
            format,
            show_spans: false,
        }
    }

    #[test]
    fn test_text_output() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.ql", "print 1;");
        let output = TokensCommand::new(args(vec![path], OutputFormat::Text))
            .execute()
            .unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("PRINT"));
        assert!(lines[1].contains("NUMBER") && lines[1].ends_with('1'));
        assert!(lines[3].contains("EOF"));
    }

    #[test]
    fn test_text_output_with_spans() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.ql", "x");
        let mut tokens_args = args(vec![path], OutputFormat::Text);
        tokens_args.show_spans = true;
        let output = TokensCommand::new(tokens_args).execute().unwrap();
        assert!(output.lines().next().unwrap().ends_with("@0..1"));
    }

    #[test]
    fn test_text_output_headers_for_multiple_files() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.ql", "a");
        let b = write_file(&dir, "b.ql", "b");
        let output = TokensCommand::new(args(vec![a, b], OutputFormat::Text))
            .execute()
            .unwrap();
        assert_eq!(output.matches("==> ").count(), 2);
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.ql", "a != \"s\"");
        let output = TokensCommand::new(args(vec![path], OutputFormat::Json))
            .execute()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let tokens = value[0]["tokens"].as_array().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1]["kind"], "BANG_EQUAL");
        assert_eq!(tokens[2]["lexeme"], "\"s\"");
        assert_eq!(tokens[2]["start"], 5);
        assert_eq!(tokens[3]["kind"], "EOF");
    }

    #[test]
    fn test_no_input_files() {
        let result = TokensCommand::new(args(vec![], OutputFormat::Text)).execute();
        assert!(matches!(result, Err(QuilltError::Validation(_))));
    }

    #[test]
    fn test_format_token_escapes_newlines() {
        let tokens = tokenize("\"a\nb\"");
        let line = format_token(&tokens[0], false);
        assert!(line.contains("\\n"));
        assert!(!line.contains('\n'));
    }
}
