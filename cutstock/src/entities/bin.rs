use crate::entities::{BinSnapshot, PanelStock, Placement};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::packing::FreeRectStore;
use crate::util::assertions;
use itertools::Itertools;

/// A [`Bin`] is one panel being filled: the parts placed on it so far and the free space left.
/// The free space is tracked as a set of maximal, possibly overlapping, free rectangles.
#[derive(Clone, Debug)]
pub struct Bin {
    /// Position of the bin in opening order
    pub index: usize,
    pub stock: PanelStock,
    /// Kerf reserved to the right of and above every placement
    pub kerf: u32,
    /// Placements in insertion order
    pub placements: Vec<Placement>,
    free_rects: FreeRectStore,
}

impl Bin {
    pub fn new(index: usize, stock: PanelStock, kerf: u32) -> Self {
        let full = Rect::from_extent(0, 0, stock.w, stock.h);
        Bin {
            index,
            stock,
            kerf,
            placements: vec![],
            free_rects: FreeRectStore::new(full),
        }
    }

    pub fn free_rects(&self) -> &FreeRectStore {
        &self.free_rects
    }

    /// Registers a placement and carves its kerf-inflated footprint out of the free rectangles.
    /// The caller guarantees the placement lies within one of the current free rectangles.
    pub fn place(&mut self, placement: Placement) {
        debug_assert_eq!(placement.bin_index, self.index);
        let footprint = placement.rect.grow(self.kerf, self.kerf);

        let hit = self
            .free_rects
            .list()
            .filter(|(_, free)| free.collides_with(&footprint))
            .map(|(i, _)| i)
            .collect_vec();

        let residuals = hit
            .into_iter()
            .filter_map(|i| self.free_rects.remove_at(i))
            .flat_map(|free| split(free, footprint))
            .collect_vec();

        residuals
            .into_iter()
            .for_each(|r| self.free_rects.append(r));
        self.free_rects.prune();

        self.placements.push(placement);

        debug_assert!(assertions::free_rects_are_pruned(&self.free_rects));
        debug_assert!(assertions::free_rects_avoid_placements(self));
        debug_assert!(assertions::placements_are_valid(
            self.stock,
            self.kerf,
            &self.placements
        ));
    }

    /// True if no parts are placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Creates an immutable record of the bin's placements.
    pub fn save(&self) -> BinSnapshot {
        BinSnapshot {
            index: self.index,
            stock: self.stock,
            placements: self.placements.clone(),
        }
    }
}

/// The parts of `free` which remain outside `footprint`: bottom, top, left and right slabs.
/// Slabs overlap each other in the corners.
fn split(free: Rect, footprint: Rect) -> impl Iterator<Item = Rect> {
    let bottom = Rect::from_extent(free.x, free.y, free.x_max(), footprint.y);
    let top = Rect::from_extent(free.x, footprint.y_max(), free.x_max(), free.y_max());
    let left = Rect::from_extent(free.x, free.y, footprint.x, free.y_max());
    let right = Rect::from_extent(footprint.x_max(), free.y, free.x_max(), free.y_max());

    [bottom, top, left, right].into_iter().flatten()
}
