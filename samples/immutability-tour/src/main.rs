//! Immutability tour entry point.
//!
//! Prints how a `Person` renders after each attempt to change it from the
//! outside. Set `RUST_LOG=immutability_tour=debug` to see each step logged.

use immutability_tour::{TourConfig, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,immutability_tour=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TourConfig::from_env()?;
    tracing::info!(
        person_id = config.person_id,
        person_name = %config.person_name,
        "Configuration loaded"
    );

    for observation in run(&config) {
        println!("{}: {}", observation.label, observation.rendering);
    }

    tracing::info!("Tour finished");
    Ok(())
}
