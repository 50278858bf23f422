use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;
use linkrank_core::logging;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return LinkRankExit::Success;
    };

    let result = cli::dispatch::load_config(cli.config.as_deref(), cli.verbose)
        .and_then(|config| cli::dispatch::execute(command, config));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            LinkRankExit::from_error(&e)
        }
    }
}
