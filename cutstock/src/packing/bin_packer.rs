use crate::entities::{Bin, Part, Placement};
use crate::geometry::primitives::Rect;
use crate::packing::{Heuristic, Score, ScoringContext};
use log::trace;

/// Best position found for a part within a single bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Slot of the free rectangle the part is anchored in
    pub free_index: usize,
    /// Rectangle the part would occupy
    pub rect: Rect,
    pub rotated: bool,
    pub score: Score,
}

/// Searches all free rectangles of `bin` for the best position of `part` under `heuristic`.
///
/// Ties are broken by the lower free rectangle slot, then in favour of the unrotated orientation.
/// Returns `None` if no free rectangle admits the part.
pub fn search(
    bin: &Bin,
    part: &Part,
    heuristic: Heuristic,
    allow_rotation: bool,
) -> Option<Candidate> {
    let ctx = ScoringContext {
        stock: bin.stock,
        placed: &bin.placements,
    };

    let mut best: Option<Candidate> = None;
    for (free_index, free) in bin.free_rects().list() {
        for (w, h, rotated) in part.orientations(allow_rotation) {
            if !admits(bin, free, w, h) {
                continue;
            }
            let score = heuristic.score(free, w, h, &ctx);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Candidate {
                    free_index,
                    rect: Rect {
                        x: free.x,
                        y: free.y,
                        w,
                        h,
                    },
                    rotated,
                    score,
                });
            }
        }
    }
    best
}

/// Places `part` at its best position in `bin`.
/// Returns the placement, or `None` if the part does not fit in the bin.
pub fn insert(
    bin: &mut Bin,
    part: &Part,
    part_index: usize,
    heuristic: Heuristic,
    allow_rotation: bool,
) -> Option<Placement> {
    let candidate = search(bin, part, heuristic, allow_rotation)?;
    trace!(
        "[PACK] part {} fits in free rectangle {} of bin {} with score {:?}",
        part.id, candidate.free_index, bin.index, candidate.score
    );

    let placement = Placement {
        bin_index: bin.index,
        rect: candidate.rect,
        rotated: candidate.rotated,
        part_id: part.id,
        part_index,
        meta: part.meta.clone(),
    };
    bin.place(placement.clone());
    Some(placement)
}

/// Whether a `w` x `h` part anchored in the bottom-left corner of `free` leaves room for the kerf.
/// No kerf is needed on a side where `free` reaches the edge of the bin.
fn admits(bin: &Bin, free: &Rect, w: u32, h: u32) -> bool {
    let kerf_x = match free.x_max() < bin.stock.w {
        true => bin.kerf,
        false => 0,
    };
    let kerf_y = match free.y_max() < bin.stock.h {
        true => bin.kerf,
        false => 0,
    };
    w as u64 + kerf_x as u64 <= free.w as u64 && h as u64 + kerf_y as u64 <= free.h as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PanelStock;
    use itertools::Itertools;

    fn r(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect::try_new(x, y, w, h).unwrap()
    }

    #[test]
    fn exact_fit_fills_the_bin() {
        let mut bin = Bin::new(0, PanelStock::new(100, 100), 0);
        let p = insert(
            &mut bin,
            &Part::new(1, 100, 100),
            0,
            Heuristic::BestShortSideFit,
            false,
        )
        .unwrap();
        assert_eq!(p.rect, r(0, 0, 100, 100));
        assert!(!p.rotated);
        assert!(bin.free_rects().is_empty());
    }

    #[test]
    fn rotation_is_used_only_when_allowed() {
        let mut bin = Bin::new(0, PanelStock::new(200, 50), 0);
        let part = Part::new(1, 50, 200);
        assert!(search(&bin, &part, Heuristic::BestShortSideFit, false).is_none());

        let p = insert(&mut bin, &part, 0, Heuristic::BestShortSideFit, true).unwrap();
        assert_eq!(p.rect, r(0, 0, 200, 50));
        assert!(p.rotated);
    }

    #[test]
    fn unrotated_wins_ties() {
        let bin = Bin::new(0, PanelStock::new(100, 100), 0);
        for heuristic in Heuristic::ALL {
            let c = search(&bin, &Part::new(1, 30, 30), heuristic, true).unwrap();
            assert!(!c.rotated, "{heuristic}");
        }
    }

    #[test]
    fn kerf_is_waived_against_the_bin_edge() {
        // 98 + 5 exceeds the panel, but nothing lies to the right of the part
        let bin = Bin::new(0, PanelStock::new(100, 100), 5);
        let c = search(&bin, &Part::new(1, 98, 40), Heuristic::BestAreaFit, false).unwrap();
        assert_eq!(c.rect, r(0, 0, 98, 40));
    }

    #[test]
    fn kerf_separates_neighbours() {
        let mut bin = Bin::new(0, PanelStock::new(100, 100), 5);
        let part = Part::new(1, 50, 50);
        insert(&mut bin, &part, 0, Heuristic::BestShortSideFit, false).unwrap();
        // the remaining 45 mm strips cannot hold another 50 mm part
        assert!(insert(&mut bin, &part, 1, Heuristic::BestShortSideFit, false).is_none());
        let small = insert(
            &mut bin,
            &Part::new(2, 45, 45),
            2,
            Heuristic::BestShortSideFit,
            false,
        )
        .unwrap();
        assert_eq!(small.rect.x.max(small.rect.y), 55);
    }

    #[test]
    fn bottom_left_prefers_the_lowest_top_edge() {
        let mut bin = Bin::new(0, PanelStock::new(100, 100), 0);
        insert(&mut bin, &Part::new(1, 60, 20), 0, Heuristic::BottomLeft, false).unwrap();
        let p = insert(&mut bin, &Part::new(2, 30, 10), 1, Heuristic::BottomLeft, false).unwrap();
        assert_eq!(p.rect, r(60, 0, 30, 10));
    }

    #[test]
    fn contact_point_hugs_placed_parts() {
        let mut bin = Bin::new(0, PanelStock::new(100, 100), 0);
        let h = Heuristic::ContactPoint;
        insert(&mut bin, &Part::new(1, 50, 50), 0, h, false).unwrap();
        let p = insert(&mut bin, &Part::new(2, 50, 20), 1, h, false).unwrap();
        // against the right wall, the floor and the first part
        assert_eq!(p.rect, r(50, 0, 50, 20));
        assert_eq!(
            bin.placements.iter().map(|p| p.part_id).collect_vec(),
            vec![1, 2]
        );
    }
}
