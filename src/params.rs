/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds the startup
 * configuration of the desert: world size, how people move and drink,
 * and where the rocks are. The defaults come from the constants in lib.rs.
 * Parameters are fixed once the simulation has been built.
 */

use crate::error::SimError;
use crate::obstacle::Obstacle;
use crate::{
    AVOID_DISTANCE, AVOID_FORCE, DRINK_DISTANCE, HEIGHT, MAX_SPEED, NUMBER_PEOPLE,
    OBSTACLE_LAYOUT, SEEK_FORCE, STEPS_PER_SECOND, THIRSTY_CHANCE, THIRSTY_TIME, WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub width: f32,
    pub height: f32,
    pub max_speed: f32,
    pub num_people: usize,
    pub thirsty_chance: f64,
    pub drink_distance: f32,
    pub thirsty_time_ms: u64,
    pub avoid_distance: f32,
    pub seek_force: f32,
    pub avoid_force: f32,
    pub person_mass: f32,
    // (x, y, radius) of every rock
    pub obstacles: Vec<(f32, f32, f32)>,
    // Seed for the starting population, None draws from entropy
    pub seed: Option<u64>,
    pub target_steps_per_second: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            max_speed: MAX_SPEED,
            num_people: NUMBER_PEOPLE,
            thirsty_chance: THIRSTY_CHANCE,
            drink_distance: DRINK_DISTANCE,
            thirsty_time_ms: THIRSTY_TIME,
            avoid_distance: AVOID_DISTANCE,
            seek_force: SEEK_FORCE,
            avoid_force: AVOID_FORCE,
            person_mass: 1.0,
            obstacles: OBSTACLE_LAYOUT.to_vec(),
            seed: None,
            target_steps_per_second: STEPS_PER_SECOND,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_people(mut self, num_people: usize) -> Self {
        self.num_people = num_people;
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<(f32, f32, f32)>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn with_world_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    // Check every parameter before anything is built from them
    pub fn validate(&self) -> Result<(), SimError> {
        let valid_extent = |v: f32| v.is_finite() && v > 0.0;
        if !valid_extent(self.width) || !valid_extent(self.height) {
            return Err(SimError::InvalidWorldSize { width: self.width, height: self.height });
        }

        if !valid_extent(self.max_speed) {
            return Err(SimError::InvalidMaxSpeed(self.max_speed));
        }

        if !(0.0..=1.0).contains(&self.thirsty_chance) {
            return Err(SimError::InvalidProbability(self.thirsty_chance));
        }

        for (name, value) in [
            ("drink_distance", self.drink_distance),
            ("avoid_distance", self.avoid_distance),
            ("seek_force", self.seek_force),
            ("avoid_force", self.avoid_force),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(SimError::NegativeDistance { name, value });
            }
        }

        if !valid_extent(self.person_mass) {
            return Err(SimError::NonPositiveMass(self.person_mass));
        }

        // Below one step per second the frame period stops being a sensible duration
        if !(self.target_steps_per_second.is_finite() && self.target_steps_per_second >= 1.0) {
            return Err(SimError::InvalidStepRate(self.target_steps_per_second));
        }

        self.build_obstacles().map(|_| ())
    }

    // Turn the layout triples into obstacles
    pub fn build_obstacles(&self) -> Result<Vec<Obstacle>, SimError> {
        self.obstacles
            .iter()
            .map(|&(x, y, radius)| Obstacle::new(x, y, radius))
            .collect()
    }
}
