use crate::entities::{BarJob, BarPlan, BarSnapshot, Cut, Unplaced, UnplacedReason};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use std::cmp::Reverse;

/// Packs the lengths of `job` onto bars using first-fit decreasing.
///
/// Lengths are visited longest first (input order among equals). Each goes onto the first open
/// bar with room for it plus the kerf separating it from the previous cut, a new bar otherwise.
pub fn pack_bars(job: &BarJob) -> BarPlan {
    let BarJob { stock, parts, kerf } = job;

    let mut bars: Vec<BarSnapshot> = vec![];
    let mut unplaced = vec![];

    let order = (0..parts.len()).sorted_by_key(|&i| (Reverse(parts[i].length), i));

    for part_index in order {
        let part = &parts[part_index];

        if part.length > stock.length {
            warn!(
                "[BARS] part {} ({} mm) is longer than a {} mm bar",
                part.id, part.length, stock.length
            );
            unplaced.push(Unplaced {
                part_id: part.id,
                part_index,
                reason: UnplacedReason::TooLargeForStock,
            });
            continue;
        }

        let offset_on = |bar: &BarSnapshot| match bar.cuts.last() {
            Some(last) => last.end() as u64 + *kerf as u64,
            None => 0,
        };

        let bar_index = bars
            .iter()
            .position(|bar| offset_on(bar) + part.length as u64 <= stock.length as u64)
            .unwrap_or_else(|| {
                debug!("[BARS] opened bar {}", bars.len());
                bars.push(BarSnapshot {
                    index: bars.len(),
                    stock: *stock,
                    cuts: vec![],
                });
                bars.len() - 1
            });

        let bar = &mut bars[bar_index];
        let cut = Cut {
            bar_index,
            offset: offset_on(bar) as u32,
            length: part.length,
            part_id: part.id,
            part_index,
            meta: part.meta.clone(),
        };
        debug!(
            "[BARS] cut part {} ({} mm) at {} mm on bar {}",
            cut.part_id, cut.length, cut.offset, bar_index
        );
        bar.cuts.push(cut);
    }

    unplaced.sort_by_key(|u| u.part_index);

    let plan = BarPlan {
        stock: *stock,
        kerf: *kerf,
        bars,
        unplaced,
    };

    info!(
        "[BARS] {} cut from {} bar(s), {} unplaced",
        plan.n_placed(),
        plan.bars.len(),
        plan.unplaced.len()
    );
    debug_assert!(assertions::bar_plan_matches_job(job, &plan));

    plan
}
