use std::path::{Path, PathBuf};

use clap::{App, AppSettings, Arg, ArgMatches};

pub(crate) struct Options {
    input: PathBuf,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            input: matches.value_of("input").unwrap().into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn clap_app() -> App<'static, 'static> {
    App::new("Picross")
        .help_message("Solve picross puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("input")
                .value_name("PATH")
                .required(true)
                .help("path to a puzzle file"),
        )
}
