//Various checks to verify the correctness of the state of the engine
//Used in debug_assert!() blocks and in tests

use crate::entities::{
    BarJob, BarPlan, Bin, PanelJob, PanelPlan, PanelStock, Placement, UnplacedReason,
};
use crate::geometry::geo_traits::{CollidesWith, Contains};
use crate::packing::FreeRectStore;
use itertools::Itertools;
use log::error;

/// No free rectangle is contained in another one.
pub fn free_rects_are_pruned(store: &FreeRectStore) -> bool {
    let live = store.list().collect_vec();
    for ((i, a), (j, b)) in live.into_iter().tuple_combinations() {
        if a.contains(b) || b.contains(a) {
            error!("free rectangles {i}: {a} and {j}: {b} are nested");
            return false;
        }
    }
    true
}

/// Every free rectangle lies within the bin and clear of every placement and its kerf.
pub fn free_rects_avoid_placements(bin: &Bin) -> bool {
    for free in bin.free_rects().iter() {
        if free.x_max() > bin.stock.w || free.y_max() > bin.stock.h {
            error!("free rectangle {free} exceeds bin {}", bin.index);
            return false;
        }
        for p in bin.placements.iter() {
            let footprint = p.rect.grow(bin.kerf, bin.kerf);
            if free.collides_with(&footprint) {
                error!("free rectangle {free} overlaps the footprint {footprint} of part {}", p.part_id);
                return false;
            }
        }
    }
    true
}

/// All placements lie within the panel and every pair is separated by at least `kerf`
/// along x or along y (which, for a kerf of 0, means they do not overlap).
pub fn placements_are_valid(stock: PanelStock, kerf: u32, placements: &[Placement]) -> bool {
    for p in placements {
        if p.rect.x_max() > stock.w || p.rect.y_max() > stock.h {
            error!("part {} at {} exceeds the {}x{} panel", p.part_id, p.rect, stock.w, stock.h);
            return false;
        }
    }
    for (a, b) in placements.iter().tuple_combinations() {
        let x_gap = gap(a.rect.x, a.rect.x_max(), b.rect.x, b.rect.x_max());
        let y_gap = gap(a.rect.y, a.rect.y_max(), b.rect.y, b.rect.y_max());
        let separated = x_gap.is_some_and(|g| g >= kerf) || y_gap.is_some_and(|g| g >= kerf);
        if !separated {
            error!(
                "parts {} at {} and {} at {} are not separated by the kerf of {kerf}",
                a.part_id, a.rect, b.part_id, b.rect
            );
            return false;
        }
    }
    true
}

/// Checks a panel plan against the job it was computed for:
/// every part is either placed exactly once with its own dimensions or reported unplaced,
/// rotation is only used when allowed, unplaced parts are genuinely too large,
/// and every bin holds a valid set of placements.
pub fn panel_plan_matches_job(job: &PanelJob, plan: &PanelPlan) -> bool {
    let mut seen = vec![0usize; job.parts.len()];

    for (i, bin) in plan.bins.iter().enumerate() {
        if bin.index != i || bin.placements.is_empty() {
            error!("bin {i} has index {} and {} placements", bin.index, bin.placements.len());
            return false;
        }
        for p in bin.placements.iter() {
            let part = &job.parts[p.part_index];
            let dims = match p.rotated {
                false => (part.w, part.h),
                true => (part.h, part.w),
            };
            if p.bin_index != i
                || p.part_id != part.id
                || dims != (p.rect.w, p.rect.h)
                || (p.rotated && !job.allow_rotation)
            {
                error!("placement {p:?} does not match part {part:?}");
                return false;
            }
            seen[p.part_index] += 1;
        }
        if !placements_are_valid(job.stock, job.kerf, &bin.placements) {
            return false;
        }
    }

    for u in plan.unplaced.iter() {
        let part = &job.parts[u.part_index];
        let too_large = !part.fits_stock(job.stock, job.allow_rotation);
        if u.part_id != part.id || too_large != (u.reason == UnplacedReason::TooLargeForStock) {
            error!("unplaced entry {u:?} does not match part {part:?}");
            return false;
        }
        seen[u.part_index] += 1;
    }

    if !plan.unplaced.is_sorted_by_key(|u| u.part_index) {
        error!("unplaced parts are not in input order");
        return false;
    }

    conserved(&seen)
}

/// Checks a bar plan against the job it was computed for:
/// every part is cut exactly once or reported unplaced, and cuts on a bar are
/// in order, separated by the kerf and within the bar.
pub fn bar_plan_matches_job(job: &BarJob, plan: &BarPlan) -> bool {
    let mut seen = vec![0usize; job.parts.len()];

    for (i, bar) in plan.bars.iter().enumerate() {
        if bar.index != i || bar.cuts.is_empty() {
            error!("bar {i} has index {} and {} cuts", bar.index, bar.cuts.len());
            return false;
        }
        if bar.consumed_length() > job.stock.length {
            error!("bar {i} is overfull: {} mm", bar.consumed_length());
            return false;
        }
        for (a, b) in bar.cuts.iter().tuple_windows() {
            if a.end() as u64 + job.kerf as u64 > b.offset as u64 {
                error!("cuts of parts {} and {} on bar {i} are not separated by the kerf", a.part_id, b.part_id);
                return false;
            }
        }
        for c in bar.cuts.iter() {
            let part = &job.parts[c.part_index];
            if c.bar_index != i || c.part_id != part.id || c.length != part.length {
                error!("cut {c:?} does not match part {part:?}");
                return false;
            }
            seen[c.part_index] += 1;
        }
    }

    for u in plan.unplaced.iter() {
        let part = &job.parts[u.part_index];
        if part.length <= job.stock.length {
            error!("part {} fits on a bar but is unplaced", part.id);
            return false;
        }
        seen[u.part_index] += 1;
    }

    conserved(&seen)
}

fn conserved(seen: &[usize]) -> bool {
    match seen.iter().position(|&n| n != 1) {
        Some(i) => {
            error!("part at index {i} appears {} times in the plan", seen[i]);
            false
        }
        None => true,
    }
}

/// Distance between the intervals `[a_min, a_max]` and `[b_min, b_max]`, `None` if they overlap.
fn gap(a_min: u32, a_max: u32, b_min: u32, b_max: u32) -> Option<u32> {
    if a_max <= b_min {
        Some(b_min - a_max)
    } else if b_max <= a_min {
        Some(a_min - b_max)
    } else {
        None
    }
}
