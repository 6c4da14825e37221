//! Types for luck-cycle schedules.

use ganzhi_base::{FourPillars, Gender, LuckCycle, LuckDirection, StartingOffset};
use serde::Serialize;

/// Default number of cycles in a schedule.
pub const DEFAULT_LUCK_CYCLES: u32 = 8;

/// Luck-cycle schedule for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckSchedule {
    pub pillars: FourPillars,
    pub gender: Gender,
    pub direction: LuckDirection,
    pub start: StartingOffset,
    pub cycles: Vec<LuckCycle>,
}
