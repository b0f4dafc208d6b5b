use crate::stats::PlanStats;
use serde::{Deserialize, Serialize};

/// External representation of a [`Job`](crate::entities::Job).
///
/// Numbers are signed so that out-of-range input is reported by validation rather than by the parser.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJob {
    /// "panel" or "bar"
    pub stock_kind: String,
    pub stock: ExtStock,
    pub parts: Vec<ExtPart>,
    /// Short name of the placement heuristic, `bssf` if not specified. Ignored for bars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<String>,
    #[serde(default)]
    pub allow_rotation: bool,
    #[serde(default)]
    pub kerf: i64,
}

/// Dimensions of the stock, either a panel or a bar.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtStock {
    Panel { bw: i64, bh: i64 },
    Bar { bar_length: i64 },
}

/// External representation of a [`Part`](crate::entities::Part) or [`LinearPart`](crate::entities::LinearPart).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPart {
    /// Identifier of the part, echoed in the plan
    pub id: u64,
    /// Width of the part, or its length when cut from a bar
    pub w: i64,
    /// Height of the part, required for panels, ignored for bars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Number of identical copies of the part, 1 if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u64>,
}

/// External representation of a [`Plan`](crate::entities::Plan).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlan {
    /// Units of stock in opening order
    pub bins: Vec<ExtBin>,
    /// Ids of the parts which could not be placed, in input order
    pub unplaced: Vec<u64>,
    pub stats: PlanStats,
}

/// A single panel or bar with everything cut from it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    pub index: usize,
    /// Width of the panel, or length of the bar
    pub w: u32,
    /// Height of the panel, absent for bars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    pub placements: Vec<ExtPlacement>,
}

/// Position of a part within its bin. For bars, `x` is the offset of the cut and `w` its length.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub part_id: u64,
    pub x: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
    pub w: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    pub rotated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}
