use crate::entities::{Bin, PanelJob, PanelPlan, Part, Unplaced, UnplacedReason};
use crate::packing::bin_packer;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use std::cmp::Reverse;

/// Packs all parts of `job` onto as few panels as the job's heuristic manages.
///
/// Parts are visited by decreasing long side, then decreasing area, then input order.
/// Each part goes into the first open bin that admits it, a new bin is opened otherwise.
/// Parts which do not fit on an empty panel are reported as unplaced.
pub fn pack_panels(job: &PanelJob) -> PanelPlan {
    let PanelJob {
        stock,
        parts,
        heuristic,
        allow_rotation,
        kerf,
    } = job;

    let mut bins: Vec<Bin> = vec![];
    let mut unplaced = vec![];

    for part_index in placement_order(parts) {
        let part = &parts[part_index];

        if !part.fits_stock(*stock, *allow_rotation) {
            warn!(
                "[PACK] part {} ({}x{}) does not fit on a {}x{} panel",
                part.id, part.w, part.h, stock.w, stock.h
            );
            unplaced.push(Unplaced {
                part_id: part.id,
                part_index,
                reason: UnplacedReason::TooLargeForStock,
            });
            continue;
        }

        let placed = bins
            .iter_mut()
            .find_map(|bin| bin_packer::insert(bin, part, part_index, *heuristic, *allow_rotation));

        let placed = match placed {
            Some(p) => Some(p),
            None => {
                let mut bin = Bin::new(bins.len(), *stock, *kerf);
                let p = bin_packer::insert(&mut bin, part, part_index, *heuristic, *allow_rotation);
                if p.is_some() {
                    debug!("[PACK] opened bin {}", bin.index);
                    bins.push(bin);
                }
                p
            }
        };

        match placed {
            Some(p) => debug!(
                "[PACK] placed part {} at {} in bin {}{}",
                p.part_id,
                p.rect,
                p.bin_index,
                if p.rotated { " (rotated)" } else { "" }
            ),
            None => {
                warn!("[PACK] part {} rejected by an empty panel", part.id);
                unplaced.push(Unplaced {
                    part_id: part.id,
                    part_index,
                    reason: UnplacedReason::NoFit,
                });
            }
        }
    }

    unplaced.sort_by_key(|u| u.part_index);

    let plan = PanelPlan {
        stock: *stock,
        kerf: *kerf,
        heuristic: *heuristic,
        allow_rotation: *allow_rotation,
        bins: bins.iter().map(Bin::save).collect(),
        unplaced,
    };

    info!(
        "[PACK] {} placed on {} panel(s) with {}, {} unplaced",
        plan.n_placed(),
        plan.bins.len(),
        heuristic,
        plan.unplaced.len()
    );
    debug_assert!(assertions::panel_plan_matches_job(job, &plan));

    plan
}

/// Order in which the parts are offered to the bins, as indices into `parts`:
/// decreasing long side, then decreasing area, then input order.
pub fn placement_order(parts: &[Part]) -> Vec<usize> {
    (0..parts.len())
        .sorted_by_key(|&i| (Reverse(parts[i].long_side()), Reverse(parts[i].area()), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PanelStock;
    use crate::packing::Heuristic;

    fn job(parts: Vec<Part>, allow_rotation: bool, kerf: u32) -> PanelJob {
        PanelJob {
            stock: PanelStock::new(100, 100),
            parts,
            heuristic: Heuristic::BestShortSideFit,
            allow_rotation,
            kerf,
        }
    }

    #[test]
    fn order_is_long_side_then_area_then_input() {
        let parts = vec![
            Part::new(0, 10, 10),
            Part::new(1, 50, 5),
            Part::new(2, 5, 50),
            Part::new(3, 50, 20),
            Part::new(4, 10, 10),
        ];
        assert_eq!(placement_order(&parts), vec![3, 1, 2, 0, 4]);
    }

    #[test]
    fn new_bin_opened_when_open_bins_are_full() {
        let parts = vec![Part::new(0, 60, 60), Part::new(1, 60, 60), Part::new(2, 60, 60)];
        let plan = pack_panels(&job(parts, false, 0));
        assert_eq!(plan.bins.len(), 3);
        assert!(plan.unplaced.is_empty());
        assert!(plan.bins.iter().all(|b| b.placements.len() == 1));
        assert_eq!(plan.bins.iter().map(|b| b.index).collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn earlier_bins_are_revisited() {
        // the small part fills the gap left in the first bin
        let parts = vec![Part::new(0, 100, 60), Part::new(1, 100, 60), Part::new(2, 100, 40)];
        let plan = pack_panels(&job(parts, false, 0));
        assert_eq!(plan.bins.len(), 2);
        assert_eq!(
            plan.bins[0].placements.iter().map(|p| p.part_id).collect_vec(),
            vec![0, 2]
        );
    }

    #[test]
    fn oversized_parts_are_unplaced_in_input_order() {
        let parts = vec![
            Part::new(7, 10, 10),
            Part::new(8, 10, 300),
            Part::new(9, 200, 50),
        ];
        let plan = pack_panels(&job(parts, true, 0));
        assert_eq!(
            plan.unplaced.iter().map(|u| u.part_id).collect_vec(),
            vec![8, 9]
        );
        assert!(
            plan.unplaced
                .iter()
                .all(|u| u.reason == UnplacedReason::TooLargeForStock)
        );
        assert_eq!(plan.n_placed(), 1);
    }
}
