use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command, command, value_parser};
use miette::{Diagnostic, Result};
use releasebook_core::{
    Controller, Event, SortKey, UnknownSortKey, UnknownViewMode, ViewMode, render,
};
use thiserror::Error;
use tracing::{Level, debug, info};

use crate::{config::Config, fs::RunType};

mod browse;
mod config;
mod data;
mod fs;
mod output;
mod package_json;
mod prompt;

/// Parse the command line and run the selected command.
///
/// # Errors
///
/// Anything that stops the command from finishing, reported as a diagnostic
pub fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(Config::DEFAULT_PATH));
    let config = Config::load(&config_path)?;
    let run_type = if matches.get_flag("dry-run") {
        RunType::DryRun(())
    } else {
        RunType::Real(())
    };

    let (command, sub_matches) = match matches.subcommand() {
        Some((name, sub_matches)) => (name, Some(sub_matches)),
        None => (RENDER, None),
    };
    let options = Options::new(&config, sub_matches)?;
    debug!("Running {command} with {options:?}");

    match command {
        LIST => {
            let controller = options.controller(false)?;
            println!("{}", output::release_lines(&controller.render()));
        }
        MONTHS => {
            let controller = options.controller(false)?;
            println!("{}", output::month_lines(&controller.render()));
        }
        BROWSE => {
            let mut controller = options.controller(true)?;
            browse::run(&mut controller)?;
            write_page(&controller, &options.output, run_type)?;
        }
        _ => {
            let controller = options.controller(true)?;
            write_page(&controller, &options.output, run_type)?;
        }
    }
    Ok(())
}

const RENDER: &str = "render";
const LIST: &str = "list";
const MONTHS: &str = "months";
const BROWSE: &str = "browse";

fn build_cli() -> Command {
    command!()
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("The config file to read")
                .long_help(format!(
                    "The config file to read. Defaults to `{}` in the current directory.",
                    Config::DEFAULT_PATH
                ))
                .env("RELEASEBOOK_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print extra information while running")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report what would be written without writing anything")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new(RENDER)
                .about("Write the release notes page (the default command)")
                .args(view_args())
                .args(page_args()),
        )
        .subcommand(
            Command::new(LIST)
                .about("Print the matching releases")
                .args(view_args()),
        )
        .subcommand(
            Command::new(MONTHS)
                .about("Print releases grouped by month")
                .arg(data_arg()),
        )
        .subcommand(
            Command::new(BROWSE)
                .about("Search and sort interactively, then write the page")
                .args(view_args())
                .args(page_args()),
        )
}

fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .value_name("PATH")
        .help("The changelog data file (JSON)")
        .value_parser(value_parser!(PathBuf))
}

fn view_args() -> [Arg; 4] {
    [
        data_arg(),
        Arg::new("search")
            .long("search")
            .value_name("TERM")
            .help("Only show releases whose version, summary, or changes contain TERM"),
        Arg::new("sort")
            .long("sort")
            .value_name("KEY")
            .help("Order releases by `date`, `version`, or `changes`, newest or largest first"),
        Arg::new("view")
            .long("view")
            .value_name("MODE")
            .help("Lay releases out as a `grid` of cards or a `list` of rows"),
    ]
}

fn page_args() -> [Arg; 3] {
    [
        Arg::new("output")
            .long("output")
            .short('o')
            .value_name("PATH")
            .help("Where to write the HTML page")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("open")
            .long("open")
            .value_name("VERSION")
            .help("Render with the detail of this release open"),
        Arg::new("package-json")
            .long("package-json")
            .value_name("PATH")
            .help("The package.json to take the project name from")
            .value_parser(value_parser!(PathBuf)),
    ]
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Everything a command needs, with flags layered over config over defaults.
#[derive(Debug)]
struct Options {
    data: PathBuf,
    output: PathBuf,
    package_json: PathBuf,
    search: Option<String>,
    sort: Option<SortKey>,
    view: Option<ViewMode>,
    open: Option<String>,
}

impl Options {
    fn new(config: &Config, matches: Option<&ArgMatches>) -> Result<Self, Error> {
        let path = |id: &str| {
            matches
                .and_then(|matches| matches.try_get_one::<PathBuf>(id).ok().flatten())
                .cloned()
        };
        let string = |id: &str| {
            matches
                .and_then(|matches| matches.try_get_one::<String>(id).ok().flatten())
                .cloned()
        };
        let sort = string("sort")
            .or_else(|| config.sort.clone())
            .map(|sort| sort.parse::<SortKey>())
            .transpose()?;
        let view = string("view")
            .or_else(|| config.view.clone())
            .map(|view| view.parse::<ViewMode>())
            .transpose()?;
        Ok(Self {
            data: path("data").unwrap_or_else(|| config.data_path()),
            output: path("output").unwrap_or_else(|| config.output_path()),
            package_json: path("package-json").unwrap_or_else(|| config.package_json_path()),
            search: string("search"),
            sort,
            view,
            open: string("open"),
        })
    }

    /// Load the data file and replay the requested options as events.
    fn controller(&self, with_title: bool) -> Result<Controller, Error> {
        let mut controller = Controller::new(data::load(&self.data)?);
        if with_title {
            if let Some(name) = package_json::project_name(&self.package_json) {
                controller.dispatch(Event::SetTitle(name));
            }
        }
        if let Some(sort) = self.sort {
            controller.dispatch(Event::SortChange(sort));
        }
        if let Some(search) = &self.search {
            controller.dispatch(Event::SearchInput(search.clone()));
        }
        if let Some(view) = self.view {
            controller.dispatch(Event::SetView(view));
        }
        if let Some(version) = &self.open {
            controller.dispatch(Event::OpenDetail(version.clone()));
        }
        Ok(controller)
    }
}

fn write_page(controller: &Controller, output: &Path, run_type: RunType<()>) -> Result<(), Error> {
    let page = render::page(&controller.render());
    fs::write(run_type.of(page.as_str()), output)?;
    if let RunType::Real(()) = run_type {
        info!("Wrote {}", output.display());
    }
    Ok(())
}

#[derive(Debug, Diagnostic, Error)]
enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] data::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fs(#[from] fs::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    SortKey(#[from] UnknownSortKey),
    #[error(transparent)]
    #[diagnostic(transparent)]
    ViewMode(#[from] UnknownViewMode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            data: Some("from-config.json".into()),
            sort: Some("version".into()),
            view: Some("list".into()),
            ..Config::default()
        };
        let matches = build_cli()
            .try_get_matches_from([
                "releasebook",
                "render",
                "--data",
                "from-flag.json",
                "--view",
                "grid",
            ])
            .unwrap();
        let options = Options::new(&config, matches.subcommand_matches(RENDER)).unwrap();

        assert_eq!(options.data, PathBuf::from("from-flag.json"));
        assert_eq!(options.view, Some(ViewMode::Grid));
        assert_eq!(options.sort, Some(SortKey::Version));
        assert_eq!(options.output, PathBuf::from("release-notes.html"));
    }

    #[test]
    fn months_has_no_view_flags() {
        let matches = build_cli()
            .try_get_matches_from(["releasebook", "months"])
            .unwrap();
        let options =
            Options::new(&Config::default(), matches.subcommand_matches(MONTHS)).unwrap();
        assert_eq!(options.sort, None);
        assert_eq!(options.search, None);
    }

    #[test]
    fn bad_sort_flag_is_a_core_diagnostic() {
        let matches = build_cli()
            .try_get_matches_from(["releasebook", "list", "--sort", "size"])
            .unwrap();
        let err = Options::new(&Config::default(), matches.subcommand_matches(LIST)).unwrap_err();
        assert!(matches!(err, Error::SortKey(_)));
        let help = err.help().map(|help| help.to_string());
        assert_eq!(
            help.as_deref(),
            Some("Releases can be sorted by `date`, `version`, or `changes`")
        );
    }

    #[test]
    fn bad_view_in_config_is_a_core_diagnostic() {
        let config = Config {
            view: Some("table".into()),
            ..Config::default()
        };
        let matches = build_cli()
            .try_get_matches_from(["releasebook", "render"])
            .unwrap();
        let err = Options::new(&config, matches.subcommand_matches(RENDER)).unwrap_err();
        assert!(matches!(err, Error::ViewMode(_)));
    }

    #[test]
    fn flag_values_are_case_insensitive() {
        let matches = build_cli()
            .try_get_matches_from(["releasebook", "list", "--sort", "Changes", "--view", "LIST"])
            .unwrap();
        let options = Options::new(&Config::default(), matches.subcommand_matches(LIST)).unwrap();
        assert_eq!(options.sort, Some(SortKey::Changes));
        assert_eq!(options.view, Some(ViewMode::List));
    }
}
