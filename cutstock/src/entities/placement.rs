use crate::entities::PartMeta;
use crate::geometry::primitives::Rect;

/// Final position of one [`Part`](crate::entities::Part) on one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the bin (in opening order) holding the part
    pub bin_index: usize,
    /// Occupied rectangle, already oriented (without kerf)
    pub rect: Rect,
    /// True if the part's width and height were swapped
    pub rotated: bool,
    pub part_id: u64,
    /// Position of the part in the job's part list
    pub part_index: usize,
    pub meta: PartMeta,
}

/// Final position of one [`LinearPart`](crate::entities::LinearPart) on one bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cut {
    pub bar_index: usize,
    /// Distance from the start of the bar to the start of the cut
    pub offset: u32,
    pub length: u32,
    pub part_id: u64,
    pub part_index: usize,
    pub meta: PartMeta,
}

impl Cut {
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }
}
