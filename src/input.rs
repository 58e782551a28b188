/*
 * Input Module
 *
 * This module handles user input events for the desert simulation.
 *
 * Features:
 * - Holding the left mouse button pours water: a new drop every frame
 * - Clicks on the control panel never place water
 * - Escape quits the application
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Convert a nannou window position to world coordinates
pub fn screen_to_world(point: Point2, width: f32, height: f32) -> Point2 {
    pt2(point.x + width / 2.0, height / 2.0 - point.y)
}

// Pointer position in world coordinates and whether the left button is held
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Point2,
    pub pressed: bool,
}

impl PointerState {
    // Where to place a drop this frame, if anywhere
    pub fn spawn_request(&self, over_ui: bool) -> Option<Point2> {
        if self.pressed && !over_ui {
            Some(self.position)
        } else {
            None
        }
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let params = model.simulation.params();
    model.pointer.position = screen_to_world(pos, params.width, params.height);
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.pointer.pressed = true;
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.pointer.pressed = false;
    }
}

// Key pressed event handler
pub fn key_pressed(app: &App, _model: &mut Model, key: Key) {
    if key == Key::Escape {
        tracing::info!("quit requested");
        app.quit();
    }
}
