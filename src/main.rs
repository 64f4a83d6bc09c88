use anyhow::Context;
use clap::Parser;
use drycontact::cli::{Cli, Commands};
use drycontact::config::{AppSettings, Paths};
use drycontact::{logging, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = Paths::discover().context("locating configuration directory")?;
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AppSettings::load(&paths).context("loading settings")?,
    };
    console::set_colors_enabled(settings.color && console::colors_enabled());

    match &cli.command {
        Commands::Show(cmd) => cmd.execute(&paths, &settings, cli.quiet)?,
        Commands::Profiles(cmd) => cmd.execute(&paths, cli.quiet)?,
    }

    Ok(())
}
