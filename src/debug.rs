/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation counters displayed in the UI. None of it feeds back into
 * the simulation.
 */

use std::time::Duration;

use crate::simulation::{Simulation, StepReport};

// Debug information to display
#[derive(Debug, Default, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub stepped: bool,
    pub people: usize,
    pub thirsty: usize,
    pub water_drops: usize,
    pub total_drinks: u64,
    pub last_report: StepReport,
}

impl DebugInfo {
    // Refresh the counters after a frame; `report` is None when the frame did not step
    pub fn record(&mut self, simulation: &Simulation, report: Option<StepReport>) {
        self.stepped = report.is_some();
        self.people = simulation.people().len();
        self.thirsty = simulation.thirsty_count();
        self.water_drops = simulation.water_drops().len();
        self.total_drinks = simulation.total_drinks();
        if let Some(report) = report {
            self.last_report = report;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;
    use nannou::prelude::*;

    #[test]
    fn record_copies_counters() {
        let params = SimulationParams::default().with_seed(3).with_num_people(10);
        let mut simulation = Simulation::new(params).unwrap();
        simulation.add_water_drop(pt2(1.0, 1.0));

        let mut info = DebugInfo::default();
        let report = StepReport { drinks: 2, became_thirsty: 0, wrapped: 1 };
        info.record(&simulation, Some(report));
        assert!(info.stepped);

        assert_eq!(info.people, 10);
        assert_eq!(info.thirsty, simulation.thirsty_count());
        assert_eq!(info.water_drops, 1);
        assert_eq!(info.last_report, report);

        // A paused frame keeps the last report
        info.record(&simulation, None);
        assert!(!info.stepped);
        assert_eq!(info.last_report, report);
    }
}
