use crate::entities::{BarPlan, Cut, PanelPlan, Placement, Plan};
use crate::io::ext_repr::{ExtBin, ExtPlacement, ExtPlan};
use crate::stats::PlanStats;

/// Exports a [`Plan`] out of the library
pub fn export(plan: &Plan) -> ExtPlan {
    match plan {
        Plan::Panels(plan) => export_panel_plan(plan),
        Plan::Bars(plan) => export_bar_plan(plan),
    }
}

pub fn export_panel_plan(plan: &PanelPlan) -> ExtPlan {
    ExtPlan {
        bins: plan
            .bins
            .iter()
            .map(|bin| ExtBin {
                index: bin.index,
                w: bin.stock.w,
                h: Some(bin.stock.h),
                placements: bin.placements.iter().map(export_placement).collect(),
            })
            .collect(),
        unplaced: plan.unplaced.iter().map(|u| u.part_id).collect(),
        stats: PlanStats::from_panel_plan(plan),
    }
}

pub fn export_bar_plan(plan: &BarPlan) -> ExtPlan {
    ExtPlan {
        bins: plan
            .bars
            .iter()
            .map(|bar| ExtBin {
                index: bar.index,
                w: bar.stock.length,
                h: None,
                placements: bar.cuts.iter().map(export_cut).collect(),
            })
            .collect(),
        unplaced: plan.unplaced.iter().map(|u| u.part_id).collect(),
        stats: PlanStats::from_bar_plan(plan),
    }
}

fn export_placement(p: &Placement) -> ExtPlacement {
    ExtPlacement {
        part_id: p.part_id,
        x: p.rect.x,
        y: Some(p.rect.y),
        w: p.rect.w,
        h: Some(p.rect.h),
        rotated: p.rotated,
        thickness: p.meta.thickness,
        material: p.meta.material.clone(),
    }
}

fn export_cut(c: &Cut) -> ExtPlacement {
    ExtPlacement {
        part_id: c.part_id,
        x: c.offset,
        y: None,
        w: c.length,
        h: None,
        rotated: false,
        thickness: c.meta.thickness,
        material: c.meta.material.clone(),
    }
}
