/// Single-bin insertion: searching the free rectangles and placing a part
pub mod bin_packer;

/// First-fit-decreasing packing of lengths onto bars
pub mod bar_packer;

/// Multi-bin packing of rectangular parts onto panels
pub mod panel_packer;

mod free_rects;
mod heuristic;

#[doc(inline)]
pub use free_rects::FreeRectStore;

#[doc(inline)]
pub use heuristic::Heuristic;

#[doc(inline)]
pub use heuristic::Score;

#[doc(inline)]
pub use heuristic::ScoringContext;

#[doc(inline)]
pub use bar_packer::pack_bars;

#[doc(inline)]
pub use panel_packer::pack_panels;
