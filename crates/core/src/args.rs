use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
};

use clap::{value_parser, Parser};

/// Command line of a test program: the bound override is `argv[1]`, everything after it is
/// ignored.
///
/// Help and version flags are disabled and hyphenated values are plain data, so no input
/// makes the program print anything besides its outcome line.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ProgramArgs {
    /// Loop bound override
    #[arg(allow_hyphen_values = true, value_parser = value_parser!(OsString))]
    pub bound: Option<OsString>,
}

impl ProgramArgs {
    /// Parses the process arguments, treating any parse failure as "no override".
    pub fn parse_lossy() -> Self {
        Self::parse_lossy_from(std::env::args_os())
    }

    pub fn parse_lossy_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // Only the program name and argv[1] reach clap, so a leading `--` is never skipped
        // and later arguments cannot affect the parse.
        let args: Vec<OsString> = args.into_iter().take(2).map(Into::into).collect();
        Self::try_parse_from(args).unwrap_or_default()
    }

    /// The override as text; invalid UTF-8 is replaced so a numeric prefix still parses.
    pub fn bound_lossy(&self) -> Option<Cow<'_, str>> {
        self.bound.as_deref().map(OsStr::to_string_lossy)
    }
}
