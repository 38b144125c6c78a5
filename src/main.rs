use bench_summary::SummaryError;
use bench_summary::cli::Cli;
use bench_summary::cli::commands;
use bench_summary::config;
use bench_summary::logging::init_logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        // Don't exit, just continue without logging
    }

    let overrides = build_cli_overrides(&cli);

    if let Err(e) = commands::summarize::execute(&overrides) {
        handle_error(&e);
    }
}

/// Print the error (and a hint, if any) to stderr and exit.
fn handle_error(err: &SummaryError) -> ! {
    tracing::debug!(error = ?err, "Fatal error");
    eprintln!("{}", err.to_human());
    std::process::exit(err.exit_code());
}

fn build_cli_overrides(cli: &Cli) -> config::CliOverrides {
    config::CliOverrides {
        criterion_dir: cli.criterion_dir.clone(),
        archive_dir: cli.archive_dir.clone(),
        no_archive: Some(cli.no_archive),
    }
}
