use dirpage::args::Args;
use dirpage::command_handler::{handle_command, load_config};
use dirpage::utils::color::{colorize_error, init_color};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (config, config_error) = load_config();
    let args = Args::parse(&config);
    init_color(args.no_color);

    if let Err(err) = handle_command(&args, config_error) {
        eprintln!("{}", colorize_error(&err.to_string()));
        process::exit(1);
    }
}
