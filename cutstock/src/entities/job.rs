use crate::entities::{BarStock, LinearPart, PanelStock, Part};
use crate::packing::Heuristic;

/// A validated request to cut rectangular parts out of panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelJob {
    pub stock: PanelStock,
    /// Parts in input order, which is the tie-breaker of last resort
    pub parts: Vec<Part>,
    pub heuristic: Heuristic,
    pub allow_rotation: bool,
    /// Saw-kerf in mm, reserved between adjacent placements along each axis
    pub kerf: u32,
}

/// A validated request to cut lengths out of bars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarJob {
    pub stock: BarStock,
    pub parts: Vec<LinearPart>,
    /// Saw-kerf in mm, reserved between adjacent cuts
    pub kerf: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    Panel(PanelJob),
    Bar(BarJob),
}

impl Job {
    pub fn n_parts(&self) -> usize {
        match self {
            Job::Panel(job) => job.parts.len(),
            Job::Bar(job) => job.parts.len(),
        }
    }
}
