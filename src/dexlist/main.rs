use clap::Parser;
use colored::Colorize;

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}
