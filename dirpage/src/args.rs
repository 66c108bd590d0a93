use crate::config::{normalize_extensions, Config, ConfigAction, FORMATS};
use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dropdown,
    Links,
    Json,
    Page,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dropdown" => Some(OutputFormat::Dropdown),
            "links" => Some(OutputFormat::Links),
            "json" => Some(OutputFormat::Json),
            "page" => Some(OutputFormat::Page),
            _ => None,
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

#[derive(Debug)]
pub enum Command {
    InitConfig { force: bool },
    Config(ConfigAction),
}

#[derive(Debug)]
pub struct Args {
    pub directory: PathBuf,
    pub extensions: Vec<String>,
    pub format: OutputFormat,
    pub field_name: String,
    pub selected: String,
    pub title: String,
    pub pretty: bool,
    pub no_color: bool,
    pub config_path: PathBuf,
    pub command: Option<Command>,
}

impl Args {
    pub fn parse(config: &Config) -> Self {
        Self::from_matches(&Self::get_cli(config).get_matches(), config)
    }

    pub fn try_parse_from<I, T>(config: &Config, itr: I) -> clap::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::get_cli(config).try_get_matches_from(itr)?;
        Ok(Self::from_matches(&matches, config))
    }

    pub fn get_cli(config: &Config) -> App<'_> {
        App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::new("directory")
                    .help("The directory to list")
                    .index(1)
                    .default_value("."),
            )
            .arg(
                Arg::new("ext")
                    .short('e')
                    .long("ext")
                    .takes_value(true)
                    .multiple_occurrences(true)
                    .use_value_delimiter(true)
                    .help("Extension to include, without the dot (repeatable, comma separated)"),
            )
            .arg(
                Arg::new("format")
                    .short('f')
                    .long("format")
                    .takes_value(true)
                    .possible_values(FORMATS)
                    .default_value(&config.default_format)
                    .help("Output format"),
            )
            .arg(
                Arg::new("name")
                    .short('n')
                    .long("name")
                    .takes_value(true)
                    .default_value(&config.field_name)
                    .help("Form field name of the dropdown"),
            )
            .arg(
                Arg::new("selected")
                    .long("selected")
                    .takes_value(true)
                    .help("File name to pre-select in the dropdown"),
            )
            .arg(
                Arg::new("title")
                    .long("title")
                    .takes_value(true)
                    .default_value(&config.page_title)
                    .help("Title of the generated page"),
            )
            .arg(
                Arg::new("pretty")
                    .long("pretty")
                    .help("Pretty-print JSON output"),
            )
            .arg(
                Arg::new("no-color")
                    .long("no-color")
                    .help("Disable colored diagnostics"),
            )
            .subcommand(
                App::new("init")
                    .about("Initialize the configuration file")
                    .arg(
                        Arg::new("force")
                            .long("force")
                            .help("Overwrite an existing configuration file"),
                    ),
            )
            .subcommand(
                App::new("config")
                    .about("View or modify configuration")
                    .arg(
                        Arg::new("set")
                            .long("set")
                            .takes_value(true)
                            .number_of_values(2)
                            .value_names(&["KEY", "VALUE"])
                            .help("Set a configuration value (e.g., --set default_format json)"),
                    ),
            )
    }

    fn from_matches(matches: &ArgMatches, config: &Config) -> Self {
        let command = if let Some(init_matches) = matches.subcommand_matches("init") {
            Some(Command::InitConfig {
                force: init_matches.is_present("force"),
            })
        } else if let Some(config_matches) = matches.subcommand_matches("config") {
            let values: Vec<&str> = config_matches
                .values_of("set")
                .map(|v| v.collect())
                .unwrap_or_default();
            match values.as_slice() {
                [key, value] => Some(Command::Config(ConfigAction::Set(
                    key.to_string(),
                    value.to_string(),
                ))),
                _ => Some(Command::Config(ConfigAction::View)),
            }
        } else {
            None
        };

        let extensions = match matches.values_of("ext") {
            Some(values) => normalize_extensions(&values.collect::<Vec<_>>()),
            None => config.default_extensions.clone(),
        };

        Args {
            directory: PathBuf::from(matches.value_of("directory").unwrap_or(".")),
            extensions,
            format: matches
                .value_of("format")
                .and_then(OutputFormat::from_name)
                .unwrap_or(OutputFormat::Links),
            field_name: matches
                .value_of("name")
                .unwrap_or(&config.field_name)
                .to_string(),
            selected: matches.value_of("selected").unwrap_or_default().to_string(),
            title: matches
                .value_of("title")
                .unwrap_or(&config.page_title)
                .to_string(),
            pretty: matches.is_present("pretty"),
            no_color: matches.is_present("no-color"),
            config_path: Config::get_config_path(),
            command,
        }
    }
}
