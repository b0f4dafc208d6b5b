use crate::entities::{PanelStock, Placement};
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Rule used to choose among the free rectangles which admit a part.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Heuristic {
    /// Minimizes the shorter leftover side
    #[default]
    #[serde(rename = "bssf")]
    BestShortSideFit,
    /// Minimizes the longer leftover side
    #[serde(rename = "blsf")]
    BestLongSideFit,
    /// Minimizes the leftover area
    #[serde(rename = "baf")]
    BestAreaFit,
    /// Minimizes the top edge of the part, then its left edge
    #[serde(rename = "bl")]
    BottomLeft,
    /// Maximizes the perimeter shared with the bin walls and already placed parts
    #[serde(rename = "contact")]
    ContactPoint,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BestAreaFit,
        Heuristic::BottomLeft,
        Heuristic::ContactPoint,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Heuristic::BestShortSideFit => "bssf",
            Heuristic::BestLongSideFit => "blsf",
            Heuristic::BestAreaFit => "baf",
            Heuristic::BottomLeft => "bl",
            Heuristic::ContactPoint => "contact",
        }
    }

    /// Scores placing a `w` x `h` part in the bottom-left corner of `free`.
    /// The part must fit inside `free`. Lower scores are better.
    pub fn score(&self, free: &Rect, w: u32, h: u32, ctx: &ScoringContext) -> Score {
        debug_assert!(w <= free.w && h <= free.h);

        let lh = (free.w - w) as i128;
        let lv = (free.h - h) as i128;
        match self {
            Heuristic::BestShortSideFit => Score::new(i128::min(lh, lv), i128::max(lh, lv)),
            Heuristic::BestLongSideFit => Score::new(i128::max(lh, lv), i128::min(lh, lv)),
            Heuristic::BestAreaFit => {
                // leftover areas of u32 rectangles exceed i64
                let la = free.area() as i128 - w as i128 * h as i128;
                Score::new(la, i128::min(lh, lv))
            }
            Heuristic::BottomLeft => Score::new(free.y as i128 + h as i128, free.x as i128),
            Heuristic::ContactPoint => {
                Score::new(-(ctx.contact(free.x, free.y, w, h) as i128), 0)
            }
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Lexicographic `(primary, secondary)` score, lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    pub primary: i128,
    pub secondary: i128,
}

impl Score {
    pub fn new(primary: i128, secondary: i128) -> Self {
        Score { primary, secondary }
    }
}

/// State of the bin a candidate is scored against.
pub struct ScoringContext<'a> {
    pub stock: PanelStock,
    pub placed: &'a [Placement],
}

impl ScoringContext<'_> {
    /// Total length of the perimeter of the candidate `(x, y, w, h)` which coincides with
    /// the bin walls or with edges of placed parts. Corner touches contribute nothing.
    pub fn contact(&self, x: u32, y: u32, w: u32, h: u32) -> u64 {
        let mut contact = 0;

        if x == 0 {
            contact += h as u64;
        }
        if x + w == self.stock.w {
            contact += h as u64;
        }
        if y == 0 {
            contact += w as u64;
        }
        if y + h == self.stock.h {
            contact += w as u64;
        }

        let candidate = Rect { x, y, w, h };
        for placed in self.placed.iter().map(|p| &p.rect) {
            if placed.x_max() == x || placed.x == x + w {
                contact += placed.y_overlap(&candidate) as u64;
            }
            if placed.y_max() == y || placed.y == y + h {
                contact += placed.x_overlap(&candidate) as u64;
            }
        }
        contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PartMeta;
    use test_case::test_case;

    fn r(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect::try_new(x, y, w, h).unwrap()
    }

    fn placed(rect: Rect) -> Placement {
        Placement {
            bin_index: 0,
            rect,
            rotated: false,
            part_id: 0,
            part_index: 0,
            meta: PartMeta::default(),
        }
    }

    #[test_case(Heuristic::BestShortSideFit, Score::new(10, 30); "bssf")]
    #[test_case(Heuristic::BestLongSideFit, Score::new(30, 10); "blsf")]
    #[test_case(Heuristic::BestAreaFit, Score::new(50 * 40 - 20 * 30, 10); "baf")]
    #[test_case(Heuristic::BottomLeft, Score::new(5 + 30, 7); "bl")]
    fn leftover_scores(heuristic: Heuristic, expected: Score) {
        let free = r(7, 5, 50, 40);
        let ctx = ScoringContext {
            stock: PanelStock::new(100, 100),
            placed: &[],
        };
        assert_eq!(heuristic.score(&free, 20, 30, &ctx), expected);
    }

    #[test]
    fn contact_counts_bin_walls_and_neighbours() {
        let placements = [placed(r(0, 0, 40, 40)), placed(r(40, 0, 20, 10))];
        let ctx = ScoringContext {
            stock: PanelStock::new(100, 100),
            placed: &placements,
        };
        // right of the first part, on top of the second
        assert_eq!(ctx.contact(40, 10, 30, 20), 20 + 20);
        // corner touch with the first part only
        assert_eq!(ctx.contact(40, 40, 10, 10), 0);
        // bottom-right corner of the bin
        assert_eq!(ctx.contact(60, 0, 40, 30), 40 + 30 + 10);
        assert_eq!(
            Heuristic::ContactPoint.score(&r(60, 0, 40, 100), 40, 30, &ctx),
            Score::new(-80, 0)
        );
    }

    #[test]
    fn best_area_fit_orders_huge_leftovers() {
        let ctx = ScoringContext {
            stock: PanelStock::new(4_200_000_000, 4_200_000_000),
            placed: &[],
        };
        let above = r(0, 2_100_000_000, 4_200_000_000, 2_100_000_000);
        let right = r(2_000_000_000, 0, 2_200_000_000, 4_200_000_000);
        let h = Heuristic::BestAreaFit;
        let s_above = h.score(&above, 100, 100, &ctx);
        let s_right = h.score(&right, 100, 100, &ctx);
        assert_eq!(s_above.primary, 4_200_000_000 * 2_100_000_000 - 100 * 100);
        assert!(s_above < s_right);
    }

    #[test]
    fn names_round_trip() {
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!("BAF".parse::<Heuristic>(), Ok(Heuristic::BestAreaFit));
        assert!("maxrects".parse::<Heuristic>().is_err());
    }
}
