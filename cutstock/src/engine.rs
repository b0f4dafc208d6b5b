use crate::entities::{Job, Plan};
use crate::error::InvalidJob;
use crate::io::ext_repr::ExtJob;
use crate::io::import;
use crate::packing::{pack_bars, pack_panels};

/// Validates `ext_job` and packs it.
///
/// Runs to completion on the calling thread. The same job always yields the same plan.
pub fn pack(ext_job: &ExtJob) -> Result<Plan, InvalidJob> {
    let job = import::import(ext_job)?;
    Ok(solve(&job))
}

/// Packs an already validated job.
pub fn solve(job: &Job) -> Plan {
    match job {
        Job::Panel(job) => Plan::Panels(pack_panels(job)),
        Job::Bar(job) => Plan::Bars(pack_bars(job)),
    }
}
