/*
 * Obstacle Module
 *
 * A rock in the desert: a static circle people steer away from.
 * Obstacles are invisible by default, the renderer only outlines them
 * when asked to.
 */

use nannou::prelude::*;

use crate::error::SimError;
use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    position: Point2,
    radius: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, radius: f32) -> Result<Self, SimError> {
        if radius.is_nan() || radius < 0.0 {
            return Err(SimError::NegativeRadius(radius));
        }

        Ok(Self {
            position: pt2(x, y),
            radius,
        })
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw_obstacle(self.position, self.radius);
    }
}
