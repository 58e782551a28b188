/*
 * UI Module
 *
 * This module contains the nannou_egui control panel and the on-screen
 * FPS counter drawn over the desert.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;

// Toggles owned by the panel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub pause_simulation: bool,
    pub show_obstacles: bool,
}

// One-off actions requested from the panel this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub clear_water: bool,
}

// Update the control panel and report what the user asked for
pub fn update_ui(egui: &mut Egui, state: &mut UiState, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Desert Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("People", |ui| {
                ui.label(format!("People: {}", debug_info.people));
                ui.label(format!("Thirsty: {}", debug_info.thirsty));
                ui.label(format!("Water drops: {}", debug_info.water_drops));
                ui.label(format!("Total drinks: {}", debug_info.total_drinks));

                if ui.button("Clear Water").clicked() {
                    actions.clear_water = true;
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Stepped this frame: {}", debug_info.stepped));
                ui.label(format!("Wrapped last step: {}", debug_info.last_report.wrapped));
            });

            ui.checkbox(&mut state.show_obstacles, "Show Obstacles");
            ui.checkbox(&mut state.pause_simulation, "Pause Simulation");
        });

    actions
}

// FPS counter in the top-right corner
pub fn draw_fps(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let margin = 10.0;
    let box_width = 120.0;
    let line_height = 24.0;

    draw.text(&format!("FPS: {}", debug_info.fps as u32))
        .x_y(window_rect.right() - margin - box_width / 2.0, window_rect.top() - margin - line_height / 2.0)
        .w_h(box_width, line_height)
        .right_justify()
        .color(WHITE)
        .font_size(24);
}
