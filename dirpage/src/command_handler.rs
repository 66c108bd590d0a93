use crate::args::{Args, Command, OutputFormat};
use crate::config::{self, Config};
use crate::error::{DirpageError, Result};
use crate::formatter::{
    DropdownFormatter, LinksFormatter, ListingFormatter, PageFormatter, PayloadFormatter,
};
use crate::lister::DirectoryLister;
use crate::report::render_error;
use crate::utils::color::colorize_warning;
use std::io;

pub fn load_config() -> (Config, Option<DirpageError>) {
    match Config::load(&Config::get_config_path()) {
        Ok(config) => (config, None),
        Err(DirpageError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            (Config::default(), None)
        }
        Err(e) => (Config::default(), Some(e)),
    }
}

pub fn handle_command(args: &Args, config_error: Option<DirpageError>) -> Result<()> {
    match &args.command {
        Some(Command::InitConfig { force }) => config::initialize_config(&args.config_path, *force),
        Some(Command::Config(action)) => config::handle_config_command(action, &args.config_path),
        None => list_directory(args, config_error),
    }
}

pub fn list_directory(args: &Args, config_error: Option<DirpageError>) -> Result<()> {
    if let Some(error) = config_error {
        eprintln!("{}", colorize_warning(&error.to_string()));
    }

    match render_listing(args) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err @ DirpageError::DirectoryUnreadable { .. }) => {
            println!("{}", render_error(args.format, &err));
            Err(err)
        }
        Err(err) => Err(err),
    }
}

pub fn render_listing(args: &Args) -> Result<String> {
    let listing = DirectoryLister::new(&args.directory, &args.extensions)?;
    create_formatter(args).format_entries(listing.matches())
}

fn create_formatter(args: &Args) -> Box<dyn ListingFormatter> {
    match args.format {
        OutputFormat::Dropdown => Box::new(DropdownFormatter::new(&args.field_name, &args.selected)),
        OutputFormat::Links => Box::new(LinksFormatter),
        OutputFormat::Json => Box::new(PayloadFormatter::new(args.pretty)),
        OutputFormat::Page => Box::new(PageFormatter::new(&args.title)),
    }
}
