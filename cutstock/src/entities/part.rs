use crate::entities::PanelStock;

/// Metadata which travels with a part from the job into the plan, untouched by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartMeta {
    /// Thickness of the part in mm
    pub thickness: Option<u32>,
    /// Free-form material tag (e.g. "wood", "steel")
    pub material: Option<String>,
}

/// A rectangular piece to be cut out of a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// Identifier assigned by the caller, not necessarily unique (parts with a quantity share it)
    pub id: u64,
    pub w: u32,
    pub h: u32,
    pub meta: PartMeta,
}

impl Part {
    pub fn new(id: u64, w: u32, h: u32) -> Self {
        Part {
            id,
            w,
            h,
            meta: PartMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: PartMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    pub fn long_side(&self) -> u32 {
        u32::max(self.w, self.h)
    }

    /// The orientations in which the part may be placed, as `(w, h, rotated)`.
    /// The unrotated orientation always comes first.
    pub fn orientations(&self, allow_rotation: bool) -> impl Iterator<Item = (u32, u32, bool)> {
        let rotated = match allow_rotation {
            true => Some((self.h, self.w, true)),
            false => None,
        };
        std::iter::once((self.w, self.h, false)).chain(rotated)
    }

    /// Whether the part fits on an empty panel of `stock` in at least one allowed orientation.
    pub fn fits_stock(&self, stock: PanelStock, allow_rotation: bool) -> bool {
        self.orientations(allow_rotation)
            .any(|(w, h, _)| w <= stock.w && h <= stock.h)
    }
}

/// A piece to be cut from a linear bar, only its length matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearPart {
    pub id: u64,
    pub length: u32,
    pub meta: PartMeta,
}

impl LinearPart {
    pub fn new(id: u64, length: u32) -> Self {
        LinearPart {
            id,
            length,
            meta: PartMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: PartMeta) -> Self {
        self.meta = meta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn orientations_respect_rotation_flag() {
        let part = Part::new(7, 30, 10);
        assert_eq!(part.orientations(false).collect_vec(), vec![(30, 10, false)]);
        assert_eq!(
            part.orientations(true).collect_vec(),
            vec![(30, 10, false), (10, 30, true)]
        );
    }

    #[test]
    fn stock_fit() {
        let stock = PanelStock::new(200, 50);
        let part = Part::new(0, 50, 200);
        assert!(!part.fits_stock(stock, false));
        assert!(part.fits_stock(stock, true));
        assert!(!Part::new(1, 201, 10).fits_stock(stock, true));
        assert!(!Part::new(2, 60, 60).fits_stock(stock, true));
    }
}
