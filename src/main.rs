use rdp_reformat::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_or_exit();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rdp_reformat=debug,info")
    } else {
        EnvFilter::new("rdp_reformat=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::reformat::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
