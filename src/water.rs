// A water drop placed by the player. The first thirsty person to reach it drinks it.

use nannou::prelude::*;

use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterDrop {
    pub position: Point2,
}

impl WaterDrop {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: pt2(x, y) }
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw_water_drop(self.position);
    }
}

impl From<Point2> for WaterDrop {
    fn from(position: Point2) -> Self {
        Self { position }
    }
}
