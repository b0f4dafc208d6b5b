/// A rectangular panel from which parts are cut (e.g. a sheet of plywood).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelStock {
    pub w: u32,
    pub h: u32,
}

impl PanelStock {
    /// Standard 2440 x 1220 mm wood panel
    pub const WOOD_PANEL: PanelStock = PanelStock { w: 2440, h: 1220 };

    pub fn new(w: u32, h: u32) -> Self {
        PanelStock { w, h }
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

/// A linear bar from which lengths are cut (e.g. a steel tube).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarStock {
    pub length: u32,
}

impl BarStock {
    /// Standard 6 m metal bar
    pub const METAL_BAR: BarStock = BarStock { length: 6000 };

    pub fn new(length: u32) -> Self {
        BarStock { length }
    }
}
