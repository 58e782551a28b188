/*
 * Renderer Module
 *
 * This module defines what the simulation hands to whoever draws it, and
 * the nannou implementation used by the application.
 *
 * The simulation works in world coordinates (origin top-left, y down).
 * nannou draws around the window centre with y up, so every position is
 * converted on the way out.
 */

use nannou::prelude::*;

use crate::{PERSON_RADIUS, WATER_DROP_SIZE};

// Everything the simulation draws after each update
pub trait Renderer {
    fn draw_person(&mut self, position: Point2, thirsty: bool);

    fn draw_water_drop(&mut self, position: Point2);

    // Rocks are invisible unless a renderer chooses to show them
    fn draw_obstacle(&mut self, _position: Point2, _radius: f32) {}
}

// Convert a world position to nannou window coordinates
pub fn world_to_screen(point: Point2, width: f32, height: f32) -> Point2 {
    pt2(point.x - width / 2.0, height / 2.0 - point.y)
}

pub struct NannouRenderer<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
    show_obstacles: bool,
}

impl<'a> NannouRenderer<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32, show_obstacles: bool) -> Self {
        Self { draw, width, height, show_obstacles }
    }

    // Sand coloured ground the people walk on
    pub fn draw_background(&mut self) {
        self.draw.background().color(rgb(0.87, 0.72, 0.53));
    }

    fn to_screen(&self, point: Point2) -> Point2 {
        world_to_screen(point, self.width, self.height)
    }
}

impl Renderer for NannouRenderer<'_> {
    fn draw_person(&mut self, position: Point2, thirsty: bool) {
        // Thirsty people are blue, the others green
        let color = if thirsty { BLUE } else { GREEN };

        self.draw.ellipse()
            .xy(self.to_screen(position))
            .radius(PERSON_RADIUS)
            .color(color);
    }

    fn draw_water_drop(&mut self, position: Point2) {
        let centre = self.to_screen(position);
        let half = WATER_DROP_SIZE / 2.0;

        // A round body with a pointed tip, fitting a WATER_DROP_SIZE square
        self.draw.ellipse()
            .xy(pt2(centre.x, centre.y - half / 3.0))
            .radius(half * 2.0 / 3.0)
            .color(DEEPSKYBLUE);
        self.draw.tri()
            .points(
                pt2(centre.x, centre.y + half),
                pt2(centre.x - half * 0.6, centre.y - half / 6.0),
                pt2(centre.x + half * 0.6, centre.y - half / 6.0),
            )
            .color(DEEPSKYBLUE);
    }

    fn draw_obstacle(&mut self, position: Point2, radius: f32) {
        if !self.show_obstacles {
            return;
        }

        self.draw.ellipse()
            .xy(self.to_screen(position))
            .radius(radius)
            .no_fill()
            .stroke(SADDLEBROWN)
            .stroke_weight(2.0);
    }
}
