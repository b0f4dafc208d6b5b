use crate::entities::{BarPlan, PanelPlan, PartMeta, Plan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fill of a single unit of stock. Capacities are in mm² for panels and mm for bars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub index: usize,
    pub capacity: u64,
    pub used: u64,
    pub waste: u64,
    pub n_parts: usize,
    /// `used / capacity` in basis points (0..=10000)
    pub fill_bp: u32,
}

/// Consumption of a single material tag across the plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUsage {
    /// `None` groups the parts without material tag
    pub material: Option<String>,
    pub n_parts: usize,
    pub used: u64,
}

/// Summary of a [`Plan`], computed from its placements only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub units: Vec<UnitStats>,
    pub n_placed: usize,
    pub n_unplaced: usize,
    pub capacity: u64,
    pub used: u64,
    pub waste: u64,
    /// Material lost to the saw between cuts (bars only, 0 for panels)
    pub kerf_loss: u64,
    pub fill_bp: u32,
    /// Ordered by material tag
    pub materials: Vec<MaterialUsage>,
}

impl PlanStats {
    pub fn new(plan: &Plan) -> Self {
        match plan {
            Plan::Panels(plan) => PlanStats::from_panel_plan(plan),
            Plan::Bars(plan) => PlanStats::from_bar_plan(plan),
        }
    }

    pub fn from_panel_plan(plan: &PanelPlan) -> Self {
        let units = plan
            .bins
            .iter()
            .map(|bin| {
                unit_stats(
                    bin.index,
                    bin.stock.area(),
                    bin.used_area(),
                    bin.placements.len(),
                )
            })
            .collect();
        let materials =
            material_usage(plan.placements().map(|p| (&p.meta, p.rect.area())));

        PlanStats::aggregate(units, plan.unplaced.len(), 0, materials)
    }

    pub fn from_bar_plan(plan: &BarPlan) -> Self {
        let units = plan
            .bars
            .iter()
            .map(|bar| {
                unit_stats(
                    bar.index,
                    bar.stock.length as u64,
                    bar.used_length() as u64,
                    bar.cuts.len(),
                )
            })
            .collect();
        let kerf_loss = plan
            .bars
            .iter()
            .map(|bar| bar.cuts.len().saturating_sub(1) as u64 * plan.kerf as u64)
            .sum();
        let materials = material_usage(plan.cuts().map(|c| (&c.meta, c.length as u64)));

        PlanStats::aggregate(units, plan.unplaced.len(), kerf_loss, materials)
    }

    fn aggregate(
        units: Vec<UnitStats>,
        n_unplaced: usize,
        kerf_loss: u64,
        materials: Vec<MaterialUsage>,
    ) -> Self {
        let capacity = units.iter().map(|u| u.capacity).sum();
        let used = units.iter().map(|u| u.used).sum();
        PlanStats {
            n_placed: units.iter().map(|u| u.n_parts).sum(),
            n_unplaced,
            capacity,
            used,
            waste: capacity - used,
            kerf_loss,
            fill_bp: basis_points(used, capacity),
            materials,
            units,
        }
    }

    /// Used capacity of the least filled unit of stock, 0 if there are none.
    pub fn least_filled_used(&self) -> u64 {
        self.units.iter().map(|u| u.used).min().unwrap_or(0)
    }
}

fn unit_stats(index: usize, capacity: u64, used: u64, n_parts: usize) -> UnitStats {
    UnitStats {
        index,
        capacity,
        used,
        waste: capacity.saturating_sub(used),
        n_parts,
        fill_bp: basis_points(used, capacity),
    }
}

fn material_usage<'a>(parts: impl Iterator<Item = (&'a PartMeta, u64)>) -> Vec<MaterialUsage> {
    let mut usage: BTreeMap<Option<String>, (usize, u64)> = BTreeMap::new();
    for (meta, used) in parts {
        let entry = usage.entry(meta.material.clone()).or_default();
        entry.0 += 1;
        entry.1 += used;
    }
    usage
        .into_iter()
        .map(|(material, (n_parts, used))| MaterialUsage {
            material,
            n_parts,
            used,
        })
        .collect()
}

/// `used / capacity` in basis points, 0 for an empty capacity.
pub fn basis_points(used: u64, capacity: u64) -> u32 {
    match capacity {
        0 => 0,
        _ => (used as u128 * 10_000 / capacity as u128) as u32,
    }
}
