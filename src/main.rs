/*
 * Desert Simulation
 *
 * People wander a desert and slowly get thirsty. Hold the left mouse button
 * to pour water drops; thirsty people walk to the nearest one and drink it,
 * steering around the rocks on the way. Escape quits.
 */

use desert::{app, SimulationParams};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("desert=info")),
        )
        .init();

    // Refuse to open a window for a desert that cannot be built
    if let Err(err) = SimulationParams::default().validate() {
        tracing::error!(%err, "invalid simulation parameters");
        std::process::exit(1);
    }

    nannou::app(app::model)
        .update(app::update)
        .run();
}
