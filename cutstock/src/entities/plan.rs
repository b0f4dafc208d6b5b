use crate::entities::{BarStock, Cut, PanelStock, Placement};
use crate::packing::Heuristic;

/// Immutable record of a single panel after packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinSnapshot {
    pub index: usize,
    pub stock: PanelStock,
    /// Placements in insertion order
    pub placements: Vec<Placement>,
}

impl BinSnapshot {
    pub fn used_area(&self) -> u64 {
        self.placements.iter().map(|p| p.rect.area()).sum()
    }
}

/// Immutable record of a single bar after packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarSnapshot {
    pub index: usize,
    pub stock: BarStock,
    /// Cuts from the start of the bar onwards
    pub cuts: Vec<Cut>,
}

impl BarSnapshot {
    /// Sum of the cut lengths, kerf excluded
    pub fn used_length(&self) -> u32 {
        self.cuts.iter().map(|c| c.length).sum()
    }

    /// Length consumed by the cuts and the kerf between them
    pub fn consumed_length(&self) -> u32 {
        self.cuts.last().map_or(0, |c| c.end())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnplacedReason {
    /// The part does not fit on an empty unit of stock in any allowed orientation
    TooLargeForStock,
    /// A fresh unit of stock rejected the part although its dimensions fit
    NoFit,
}

/// A part which could not be placed anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unplaced {
    pub part_id: u64,
    pub part_index: usize,
    pub reason: UnplacedReason,
}

/// Outcome of packing a [`PanelJob`](crate::entities::PanelJob).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelPlan {
    pub stock: PanelStock,
    pub kerf: u32,
    pub heuristic: Heuristic,
    pub allow_rotation: bool,
    /// Bins in opening order
    pub bins: Vec<BinSnapshot>,
    /// Parts that could not be placed, in input order
    pub unplaced: Vec<Unplaced>,
}

impl PanelPlan {
    pub fn n_placed(&self) -> usize {
        self.bins.iter().map(|b| b.placements.len()).sum()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.bins.iter().flat_map(|b| b.placements.iter())
    }
}

/// Outcome of packing a [`BarJob`](crate::entities::BarJob).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarPlan {
    pub stock: BarStock,
    pub kerf: u32,
    /// Bars in opening order
    pub bars: Vec<BarSnapshot>,
    /// Parts that could not be placed, in input order
    pub unplaced: Vec<Unplaced>,
}

impl BarPlan {
    pub fn n_placed(&self) -> usize {
        self.bars.iter().map(|b| b.cuts.len()).sum()
    }

    pub fn cuts(&self) -> impl Iterator<Item = &Cut> {
        self.bars.iter().flat_map(|b| b.cuts.iter())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    Panels(PanelPlan),
    Bars(BarPlan),
}

impl Plan {
    /// Number of stock units consumed
    pub fn n_stock_units(&self) -> usize {
        match self {
            Plan::Panels(plan) => plan.bins.len(),
            Plan::Bars(plan) => plan.bars.len(),
        }
    }

    pub fn unplaced(&self) -> &[Unplaced] {
        match self {
            Plan::Panels(plan) => &plan.unplaced,
            Plan::Bars(plan) => &plan.unplaced,
        }
    }
}
