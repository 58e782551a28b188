/*
 * Application Module
 *
 * This module defines the nannou model for the desert simulation and wires
 * the window, input, clock and renderer around the Simulation.
 *
 * Per frame:
 * - The control panel is updated
 * - Unless paused, a water drop is placed while the mouse is held and the
 *   simulation steps exactly once
 * - The desert, the panel and the FPS counter are drawn
 *
 * nannou paces frames at the configured step rate, so one frame is one step.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::input::{self, PointerState};
use crate::params::SimulationParams;
use crate::renderer::NannouRenderer;
use crate::simulation::{Simulation, StepReport};
use crate::ui::{self, UiState};

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub pointer: PointerState,
    pub clock: FrameClock,
    pub ui_state: UiState,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // main() has already validated the defaults
    let params = SimulationParams::default();
    let simulation = Simulation::new(params.clone()).expect("simulation parameters are valid");
    let clock = FrameClock::new(params.target_steps_per_second).expect("step rate is valid");

    // One update, and so one step, per frame period
    app.set_loop_mode(LoopMode::Rate { update_interval: clock.frame_period() });

    // Create the main window at the size of the world
    let window_id = app
        .new_window()
        .title("Desert")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .key_pressed(input::key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    Model {
        simulation,
        egui,
        debug_info: DebugInfo::default(),
        pointer: PointerState::default(),
        clock,
        ui_state: UiState::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.ui_state, &model.debug_info);
    if actions.clear_water {
        model.simulation.clear_water_drops();
    }

    let over_ui = model.egui.ctx().is_pointer_over_area();
    let report = advance_frame(
        &mut model.simulation,
        &model.pointer,
        over_ui,
        model.ui_state.pause_simulation,
        model.clock.now_ms(),
    );

    model.debug_info.record(&model.simulation, report);
}

// Run one rendered frame of simulation: at most one new drop and exactly one step
pub fn advance_frame(
    simulation: &mut Simulation,
    pointer: &PointerState,
    over_ui: bool,
    paused: bool,
    current_time: u64,
) -> Option<StepReport> {
    if paused {
        return None;
    }

    if let Some(position) = pointer.spawn_request(over_ui) {
        simulation.queue_water_drop(position);
    }

    Some(simulation.step(current_time))
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    let params = model.simulation.params();
    let mut renderer = NannouRenderer::new(&draw, params.width, params.height, model.ui_state.show_obstacles);
    renderer.draw_background();
    model.simulation.render(&mut renderer);

    ui::draw_fps(&draw, &model.debug_info, app.window_rect());

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
