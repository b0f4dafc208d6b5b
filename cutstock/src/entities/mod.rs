mod bin;
mod job;
mod part;
mod placement;
mod plan;
mod stock;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use job::{BarJob, Job, PanelJob};

#[doc(inline)]
pub use part::{LinearPart, Part, PartMeta};

#[doc(inline)]
pub use placement::{Cut, Placement};

#[doc(inline)]
pub use plan::{BarPlan, BarSnapshot, BinSnapshot, PanelPlan, Plan, Unplaced, UnplacedReason};

#[doc(inline)]
pub use stock::{BarStock, PanelStock};
