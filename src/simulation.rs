/*
 * Simulation Module
 *
 * This module owns the desert: the people, the rocks and the water drops.
 * One call to `step` advances the world by exactly one frame:
 * 1. Water drops placed since the last frame are added
 * 2. Thirsty people drink from, or walk towards, the nearest drop
 * 3. Everyone is pushed away from nearby rocks
 * 4. Forces are integrated and thirst timers checked
 * 5. People who left the world re-enter on the opposite edge
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::error::SimError;
use crate::obstacle::Obstacle;
use crate::params::SimulationParams;
use crate::person::Person;
use crate::renderer::Renderer;
use crate::water::WaterDrop;

// What happened during one step, for the debug panel and logs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub drinks: usize,
    pub became_thirsty: usize,
    pub wrapped: usize,
}

pub struct Simulation {
    people: Vec<Person>,
    obstacles: Vec<Obstacle>,
    water_drops: Vec<WaterDrop>,
    pending_drops: Vec<WaterDrop>,
    params: SimulationParams,
    total_drinks: u64,
}

impl Simulation {
    // Build the desert with a randomly placed population
    pub fn new(params: SimulationParams) -> Result<Self, SimError> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let people: Vec<Person> = (0..params.num_people)
            .map(|_| Person::random(&mut rng, &params).with_mass(params.person_mass))
            .collect::<Result<_, _>>()?;

        let simulation = Self::with_people(params, people)?;
        info!(
            people = simulation.people.len(),
            thirsty = simulation.thirsty_count(),
            obstacles = simulation.obstacles.len(),
            "desert populated"
        );
        Ok(simulation)
    }

    // Build the desert around an explicit population
    pub fn with_people(params: SimulationParams, people: Vec<Person>) -> Result<Self, SimError> {
        params.validate()?;
        let obstacles = params.build_obstacles()?;

        // Every person carries the configured mass
        let people = people
            .into_iter()
            .map(|person| person.with_mass(params.person_mass))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            people,
            obstacles,
            water_drops: Vec::new(),
            pending_drops: Vec::new(),
            params,
            total_drinks: 0,
        })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn water_drops(&self) -> &[WaterDrop] {
        &self.water_drops
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn thirsty_count(&self) -> usize {
        self.people.iter().filter(|person| person.is_thirsty()).count()
    }

    pub fn total_drinks(&self) -> u64 {
        self.total_drinks
    }

    // Place a drop immediately
    pub fn add_water_drop(&mut self, position: Point2) {
        self.water_drops.push(WaterDrop::from(position));
    }

    // Place a drop at the start of the next step
    pub fn queue_water_drop(&mut self, position: Point2) {
        self.pending_drops.push(WaterDrop::from(position));
    }

    pub fn clear_water_drops(&mut self) {
        self.water_drops.clear();
        self.pending_drops.clear();
    }

    // Advance the world by one frame. `current_time` is in milliseconds.
    pub fn step(&mut self, current_time: u64) -> StepReport {
        let mut report = StepReport::default();

        // New drops land before anyone looks for water
        self.water_drops.append(&mut self.pending_drops);

        for person in &mut self.people {
            if person.is_thirsty() {
                if let Some((index, distance)) = nearest_drop(&self.water_drops, person.position) {
                    if distance < self.params.drink_distance {
                        // Gone for everyone processed after this person
                        self.water_drops.remove(index);
                        person.drink(current_time);
                        report.drinks += 1;
                        debug!(x = person.position.x, y = person.position.y, "person drank");
                    } else {
                        person.move_towards(self.water_drops[index].position, &self.params);
                    }
                }
            }

            // Avoid obstacles
            for obstacle in &self.obstacles {
                person.avoid_obstacle(obstacle, &self.params);
            }

            if person.update(current_time, &self.params) {
                report.became_thirsty += 1;
            }
        }

        // Wrap only once everyone has moved, so distances above use unwrapped positions
        for person in &mut self.people {
            if person.wrap_edges(self.params.width, self.params.height) {
                report.wrapped += 1;
            }
        }

        self.total_drinks += report.drinks as u64;
        if report.became_thirsty > 0 {
            debug!(count = report.became_thirsty, "people became thirsty again");
        }
        trace!(time = current_time, ?report, drops = self.water_drops.len(), "step");

        report
    }

    // Hand the current state to a renderer: rocks, then water, then people
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        for obstacle in &self.obstacles {
            obstacle.draw(renderer);
        }

        for water_drop in &self.water_drops {
            water_drop.draw(renderer);
        }

        for person in &self.people {
            person.draw(renderer);
        }
    }
}

// Index and distance of the drop closest to `position`; ties go to the earliest drop
fn nearest_drop(water_drops: &[WaterDrop], position: Point2) -> Option<(usize, f32)> {
    let mut nearest: Option<(usize, f32)> = None;

    for (i, drop) in water_drops.iter().enumerate() {
        let d = position.distance(drop.position);
        match nearest {
            Some((_, best)) if d >= best => {}
            _ => nearest = Some((i, d)),
        }
    }

    nearest
}
