/*
 * Desert Simulation - Module Definitions
 *
 * This file defines the module structure for the desert simulation.
 * People wander the desert, get thirsty, walk to water drops placed with
 * the mouse and steer around invisible rocks.
 */

// Re-export key components for easier access
pub use person::Person;
pub use obstacle::Obstacle;
pub use water::WaterDrop;
pub use simulation::{Simulation, StepReport};
pub use params::SimulationParams;
pub use error::SimError;
pub use renderer::Renderer;
pub use debug::DebugInfo;

// Define modules
pub mod person;
pub mod obstacle;
pub mod water;
pub mod simulation;
pub mod params;
pub mod error;
pub mod renderer;
pub mod input;
pub mod clock;
pub mod debug;
pub mod ui;
pub mod app;

// World size
pub const WIDTH: f32 = 1000.0;
pub const HEIGHT: f32 = 600.0;

// People
pub const MAX_SPEED: f32 = 3.0;
pub const NUMBER_PEOPLE: usize = 100;
pub const THIRSTY_CHANCE: f64 = 0.5;
pub const DRINK_DISTANCE: f32 = 10.0;
pub const THIRSTY_TIME: u64 = 5000; // milliseconds before a quenched person is thirsty again
pub const AVOID_DISTANCE: f32 = 50.0;
pub const SEEK_FORCE: f32 = 0.1;
pub const AVOID_FORCE: f32 = 0.2;

// Frame rate the simulation steps at
pub const STEPS_PER_SECOND: f32 = 60.0;

// Drawing sizes
pub const PERSON_RADIUS: f32 = 5.0;
pub const WATER_DROP_SIZE: f32 = 20.0;

// Rocks the people walk around, as (x, y, radius)
pub const OBSTACLE_LAYOUT: [(f32, f32, f32); 8] = [
    (350.0, 25.0, 70.0),
    (225.0, 300.0, 50.0),
    (300.0, 250.0, 60.0),
    (550.0, 200.0, 50.0),
    (550.0, 200.0, 50.0),
    (950.0, 125.0, 75.0),
    (950.0, 550.0, 40.0),
    (750.0, 550.0, 40.0),
];
