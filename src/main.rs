use suffix_pad::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = suffix_pad::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
