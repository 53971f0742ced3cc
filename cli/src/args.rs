//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

const KEYS: &str = "\
Keys: i type, Enter transcribe, Left/h previous, Right/l next,
      1-6 touch a dot, drag the mouse over the grid, q quit";

/// Transcribe text into Grade 2 Braille cells and explore them by touch.
#[derive(Debug, Parser)]
#[command(name = "braille", version, after_help = KEYS)]
pub struct CliArgs {
    /// Load text from a UTF-8 file (up to 1 MiB)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Text to transcribe
    #[arg(value_name = "TEXT", trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl CliArgs {
    /// Positional words joined by single spaces.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        (!self.words.is_empty()).then(|| self.words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    use super::CliArgs;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("braille").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn no_arguments() {
        let args = parse(&[]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.text(), None);
    }

    #[test]
    fn words_become_text() {
        let args = parse(&["the", "cat"]).unwrap();
        assert_eq!(args.text().as_deref(), Some("the cat"));
        assert!(args.file.is_none());
    }

    #[test]
    fn file_forms() {
        let expected = Some(PathBuf::from("notes.txt"));
        assert_eq!(parse(&["--file", "notes.txt"]).unwrap().file, expected);
        assert_eq!(parse(&["-f", "notes.txt"]).unwrap().file, expected);
        assert_eq!(parse(&["--file=notes.txt"]).unwrap().file, expected);
    }

    #[test]
    fn file_and_text_together() {
        let args = parse(&["-f", "a.txt", "hello"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("a.txt")));
        assert_eq!(args.text().as_deref(), Some("hello"));
    }

    #[test]
    fn double_dash_ends_options() {
        let args = parse(&["--", "-h", "--file"]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.text().as_deref(), Some("-h --file"));
    }

    #[test]
    fn errors() {
        assert!(parse(&["--file"]).is_err());
        assert_eq!(
            parse(&["--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["-f", "a", "-f", "b"]).is_err());
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(
            parse(&["--help"]).unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
        assert_eq!(parse(&["-V"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }
}
