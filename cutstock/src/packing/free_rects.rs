use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Rect;
use itertools::Itertools;

/// Ordered collection of the maximal free rectangles of a single bin.
///
/// Free rectangles may overlap each other, their union covers the unoccupied area of the bin.
/// Rectangles live in slots which keep their index until the next [`FreeRectStore::prune`],
/// so removal is O(1) and iteration always follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct FreeRectStore {
    slots: Vec<Option<Rect>>,
    n_live: usize,
}

impl FreeRectStore {
    pub fn new(initial: impl IntoIterator<Item = Rect>) -> Self {
        let mut store = FreeRectStore::default();
        initial.into_iter().for_each(|r| store.append(r));
        store
    }

    pub fn len(&self) -> usize {
        self.n_live
    }

    pub fn is_empty(&self) -> bool {
        self.n_live == 0
    }

    /// Iterates the current free rectangles in insertion order, together with their slot index.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Rect)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (i, r)))
    }

    /// Removes the rectangle in slot `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<Rect> {
        let removed = self.slots.get_mut(index).and_then(|s| s.take());
        if removed.is_some() {
            self.n_live -= 1;
        }
        removed
    }

    /// Adds a free rectangle at the end of the store.
    /// Call [`FreeRectStore::prune`] once a batch of appends is complete.
    pub fn append(&mut self, rect: Rect) {
        self.slots.push(Some(rect));
        self.n_live += 1;
    }

    /// Removes every rectangle which is contained in another one.
    /// Of two equal rectangles, the one inserted last is removed.
    /// Compacts the slots afterwards, the relative order of the survivors is preserved.
    pub fn prune(&mut self) {
        let rects = self.slots.drain(..).flatten().collect_vec();
        let mut redundant = vec![false; rects.len()];

        for i in 0..rects.len() {
            if redundant[i] {
                continue;
            }
            for j in (i + 1)..rects.len() {
                if redundant[j] {
                    continue;
                }
                match rects[i].relation_to(&rects[j]) {
                    GeoRelation::Surrounding => redundant[j] = true,
                    GeoRelation::Enclosed => {
                        redundant[i] = true;
                        break;
                    }
                    GeoRelation::Intersecting | GeoRelation::Disjoint => {}
                }
            }
        }

        self.slots = rects
            .into_iter()
            .zip(redundant)
            .filter(|(_, redundant)| !redundant)
            .map(|(r, _)| Some(r))
            .collect();
        self.n_live = self.slots.len();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.list().map(|(_, r)| r)
    }
}
