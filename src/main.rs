use clap::Parser;
use playstats::cli::{get_log_level, Cli};
use playstats::config::Config;
use tracing::{debug, error, info, trace};

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    cli.apply_to(&mut config);

    let log_level = get_log_level(cli.verbose, config.log_level.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("playstats started with verbosity level: {}", cli.verbose);
    trace!("Effective configuration: {:?}", config);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(2);
    }

    match playstats::pipeline::run(&config) {
        Ok(summary) if summary.is_success() => {
            info!(
                "Done: {} tables written to {}",
                summary.tables_written,
                config.output_dir.display()
            );
        }
        Ok(summary) => {
            error!(
                "{} table(s) could not be written: {}",
                summary.failed_tables.len(),
                summary.failed_tables.join(", ")
            );
            std::process::exit(1);
        }
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
