use crate::config::CutOptConfig;
use cutstock::io::ext_repr::{ExtJob, ExtPlan};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutOptOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub plan: ExtPlan,
    /// Short name of the heuristic the plan was packed with, absent for bar jobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packed_with: Option<String>,
    pub config: CutOptConfig,
}
