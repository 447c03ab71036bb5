// Entrypoint for the workout CLI.
// - Keeps `main` small: set up logging, load config, build the API client
//   and hand both to the UI flow.
// - Any error ends the run; `anyhow` prints the context chain.

use motivational_workout::{config::Config, ui::run, ApiClient};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr at `warn` unless RUST_LOG says otherwise, so they
    // don't interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let api = ApiClient::new(&config)?;

    run(&api, &config)?;
    Ok(())
}
