use tracing_subscriber::{
    FmtSubscriber,
    filter::{EnvFilter, LevelFilter},
};

fn create_filter(verbose: u8) -> anyhow::Result<EnvFilter> {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // -v sets the default level, RUST_LOG overrides it per target.
    Ok(EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env()?)
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only the report.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(create_filter(verbose)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
