/*
 * Person Module
 *
 * This module defines the Person struct and its behavior.
 * Each person follows two steering rules:
 * 1. Seek: walk towards the nearest water drop while thirsty
 * 2. Avoid: push away from any rock that is too close
 * Steering forces accumulate into the acceleration and are applied
 * together in a single update per frame.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::error::SimError;
use crate::obstacle::Obstacle;
use crate::params::SimulationParams;
use crate::renderer::Renderer;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub position: Point2,
    velocity: Vec2,
    acceleration: Vec2,
    mass: f32,
    thirsty: bool,
    // Milliseconds timestamp of the last drink, cleared when thirst returns
    last_drink_time: Option<u64>,
}

impl Person {
    pub fn new(position: Point2, velocity: Vec2, thirsty: bool) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass: 1.0,
            thirsty,
            last_drink_time: None,
        }
    }

    // A person somewhere in the world, moving in a random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Self {
        let x = rng.gen_range(0.0..params.width);
        let y = rng.gen_range(0.0..params.height);

        // Random initial velocity, each axis within the speed limit
        let vx = rng.gen_range(-params.max_speed..=params.max_speed);
        let vy = rng.gen_range(-params.max_speed..=params.max_speed);

        let thirsty = rng.gen_bool(params.thirsty_chance);

        Self::new(pt2(x, y), vec2(vx, vy), thirsty)
    }

    pub fn with_mass(mut self, mass: f32) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass(mass));
        }
        self.mass = mass;
        Ok(self)
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_thirsty(&self) -> bool {
        self.thirsty
    }

    pub fn last_drink_time(&self) -> Option<u64> {
        self.last_drink_time
    }

    // Apply a force to the person, scaled by its mass
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    // Walk towards a target until close enough to drink from it
    pub fn move_towards(&mut self, target: Point2, params: &SimulationParams) {
        let offset = target - self.position;
        let distance = offset.length();

        // Within reach there is nothing left to walk, and pushing on would only jitter
        if distance > params.drink_distance {
            self.apply_force(offset / distance * params.seek_force);
        }
    }

    // Push away from an obstacle when inside its influence radius
    pub fn avoid_obstacle(&mut self, obstacle: &Obstacle, params: &SimulationParams) {
        let offset = self.position - obstacle.position();
        let distance = offset.length();

        // Standing exactly on the centre gives no direction to flee in
        if distance < obstacle.radius() + params.avoid_distance && distance > 0.0 {
            self.apply_force(offset / distance * params.avoid_force);
        }
    }

    // Integrate the accumulated forces and advance the thirst timer.
    // Returns true when the person became thirsty again during this update.
    pub fn update(&mut self, current_time: u64, params: &SimulationParams) -> bool {
        // Update velocity
        self.velocity += self.acceleration;

        // Limit speed, keeping the direction
        let speed = self.velocity.length();
        if speed > params.max_speed {
            self.velocity *= params.max_speed / speed;
        }

        // Update position
        self.position += self.velocity;

        // Reset acceleration
        self.acceleration = Vec2::ZERO;

        if self.thirsty {
            return false;
        }

        match self.last_drink_time {
            Some(drank_at) if current_time.saturating_sub(drank_at) > params.thirsty_time_ms => {
                self.thirsty = true;
                self.last_drink_time = None;
                true
            }
            _ => false,
        }
    }

    // Quench thirst and start the timer until the next one
    pub fn drink(&mut self, current_time: u64) {
        self.thirsty = false;
        self.last_drink_time = Some(current_time);
    }

    // Wrap the person around the world edges. Returns true if it moved.
    pub fn wrap_edges(&mut self, width: f32, height: f32) -> bool {
        let before = self.position;

        if self.position.x > width {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = width;
        }

        if self.position.y > height {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = height;
        }

        self.position != before
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw_person(self.position, self.thirsty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still_person(x: f32, y: f32) -> Person {
        Person::new(pt2(x, y), Vec2::ZERO, true)
    }

    #[test]
    fn apply_force_divides_by_mass() {
        let mut person = still_person(0.0, 0.0).with_mass(2.0).unwrap();
        person.apply_force(vec2(1.0, -4.0));
        person.apply_force(vec2(1.0, 0.0));
        assert_eq!(person.acceleration, vec2(1.0, -2.0));
    }

    #[test]
    fn accessors_follow_steering_and_integration() {
        let params = SimulationParams::default();
        let mut person = Person::new(pt2(0.0, 0.0), vec2(1.0, 0.0), true);
        person.apply_force(vec2(0.5, 0.0));
        assert_eq!(person.acceleration(), vec2(0.5, 0.0));
        assert_eq!(person.velocity(), vec2(1.0, 0.0));

        person.update(0, &params);
        assert_eq!(person.velocity(), vec2(1.5, 0.0));
        assert_eq!(person.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn with_mass_rejects_non_positive() {
        assert_eq!(still_person(0.0, 0.0).with_mass(0.0), Err(SimError::NonPositiveMass(0.0)));
        assert!(still_person(0.0, 0.0).with_mass(-1.0).is_err());
    }

    #[test]
    fn move_towards_pushes_at_the_target() {
        let params = SimulationParams::default();
        let mut person = still_person(0.0, 0.0);
        person.move_towards(pt2(0.0, 100.0), &params);

        assert!((person.acceleration.length() - 0.1).abs() < 1e-6);
        assert!(person.acceleration.y > 0.0);
        assert_eq!(person.acceleration.x, 0.0);
    }

    #[test]
    fn move_towards_is_a_no_op_within_reach() {
        let params = SimulationParams::default();
        let mut person = still_person(0.0, 0.0);
        person.move_towards(pt2(10.0, 0.0), &params);
        person.move_towards(pt2(3.0, 4.0), &params);
        assert_eq!(person.acceleration, Vec2::ZERO);
    }

    #[test]
    fn avoid_obstacle_pushes_away_from_centre() {
        let params = SimulationParams::default();
        let obstacle = Obstacle::new(105.0, 100.0, 1.0).unwrap();
        let mut person = still_person(100.0, 100.0);
        person.avoid_obstacle(&obstacle, &params);

        assert!((person.acceleration.x + 0.2).abs() < 1e-6);
        assert_eq!(person.acceleration.y, 0.0);
    }

    #[test]
    fn avoid_obstacle_ignores_far_rocks() {
        let params = SimulationParams::default();
        let obstacle = Obstacle::new(200.0, 100.0, 10.0).unwrap();
        let mut person = still_person(100.0, 100.0);
        person.avoid_obstacle(&obstacle, &params);
        assert_eq!(person.acceleration, Vec2::ZERO);
    }

    #[test]
    fn overlapping_obstacles_add_up() {
        let params = SimulationParams::default();
        let obstacle = Obstacle::new(110.0, 100.0, 5.0).unwrap();
        let mut person = still_person(100.0, 100.0);
        person.avoid_obstacle(&obstacle, &params);
        person.avoid_obstacle(&obstacle, &params);
        assert!((person.acceleration.x + 0.4).abs() < 1e-6);
    }

    #[test]
    fn avoid_obstacle_at_centre_is_a_no_op() {
        let params = SimulationParams::default();
        let obstacle = Obstacle::new(50.0, 50.0, 10.0).unwrap();
        let mut person = still_person(50.0, 50.0);
        person.avoid_obstacle(&obstacle, &params);
        assert_eq!(person.acceleration, Vec2::ZERO);
    }

    #[test]
    fn update_clamps_speed_and_keeps_direction() {
        let params = SimulationParams::default();
        let mut person = Person::new(pt2(0.0, 0.0), vec2(3.0, 4.0), true);
        person.update(0, &params);

        assert!((person.velocity.length() - params.max_speed).abs() < 1e-5);
        assert!((person.velocity.x / person.velocity.y - 0.75).abs() < 1e-5);
        assert_eq!(person.position, person.velocity);
        assert_eq!(person.acceleration, Vec2::ZERO);
    }

    #[test]
    fn update_with_zero_velocity_stays_put() {
        let params = SimulationParams::default();
        let mut person = still_person(10.0, 10.0);
        person.update(0, &params);
        assert_eq!(person.velocity, Vec2::ZERO);
        assert_eq!(person.position, pt2(10.0, 10.0));
    }

    #[test]
    fn thirst_returns_after_timeout() {
        let params = SimulationParams::default();
        let mut person = still_person(0.0, 0.0);
        person.drink(1_000);
        assert!(!person.is_thirsty());
        assert_eq!(person.last_drink_time(), Some(1_000));

        // Exactly at the limit is not past it
        assert!(!person.update(6_000, &params));
        assert!(!person.is_thirsty());

        assert!(person.update(6_001, &params));
        assert!(person.is_thirsty());
        assert_eq!(person.last_drink_time(), None);
    }

    #[test]
    fn never_drank_never_gets_thirsty_by_timer() {
        let params = SimulationParams::default();
        let mut person = Person::new(pt2(0.0, 0.0), Vec2::ZERO, false);
        assert!(!person.update(1_000_000, &params));
        assert!(!person.is_thirsty());
    }

    #[test]
    fn wrap_sends_to_the_opposite_edge() {
        let mut person = Person::new(pt2(1005.0, -3.0), vec2(2.0, -1.0), false);
        assert!(person.wrap_edges(1000.0, 600.0));
        assert_eq!(person.position, pt2(0.0, 600.0));
        assert_eq!(person.velocity, vec2(2.0, -1.0));

        let mut person = Person::new(pt2(-1.0, 601.0), Vec2::ZERO, false);
        assert!(person.wrap_edges(1000.0, 600.0));
        assert_eq!(person.position, pt2(1000.0, 0.0));
    }

    #[test]
    fn wrap_leaves_inside_points_alone() {
        let mut person = still_person(1000.0, 0.0);
        assert!(!person.wrap_edges(1000.0, 600.0));
        assert_eq!(person.position, pt2(1000.0, 0.0));
    }

    #[test]
    fn random_person_starts_inside_the_world() {
        let params = SimulationParams::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let person = Person::random(&mut rng, &params);
            assert!((0.0..params.width).contains(&person.position.x));
            assert!((0.0..params.height).contains(&person.position.y));
            assert!(person.velocity.x.abs() <= params.max_speed);
            assert!(person.velocity.y.abs() <= params.max_speed);
            assert_eq!(person.last_drink_time(), None);
        }
    }

    proptest! {
        #[test]
        fn speed_never_exceeds_limit(
            vx in -50.0f32..50.0, vy in -50.0f32..50.0,
            fx in -50.0f32..50.0, fy in -50.0f32..50.0,
        ) {
            let params = SimulationParams::default();
            let mut person = Person::new(pt2(0.0, 0.0), vec2(vx, vy), true);
            person.apply_force(vec2(fx, fy));
            person.update(0, &params);
            prop_assert!(person.velocity.length() <= params.max_speed + 1e-4);
        }

        #[test]
        fn wrapped_position_is_inside_world(x in -500.0f32..1500.0, y in -500.0f32..1100.0) {
            let mut person = Person::new(pt2(x, y), Vec2::ZERO, false);
            person.wrap_edges(1000.0, 600.0);
            prop_assert!((0.0..=1000.0).contains(&person.position.x));
            prop_assert!((0.0..=600.0).contains(&person.position.y));
        }
    }
}
