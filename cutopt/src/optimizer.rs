use std::time::Instant;

use cutstock::entities::{Job, PanelJob, PanelPlan, Plan};
use cutstock::packing::{Heuristic, pack_bars, pack_panels};
use cutstock::stats::PlanStats;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::CutOptConfig;

/// Packs a job with one or more heuristics and keeps the best plan.
pub struct CutOptimizer {
    pub job: Job,
    pub config: CutOptConfig,
}

/// Best plan found by the [`CutOptimizer`]
#[derive(Clone, Debug)]
pub struct CutSolution {
    pub plan: Plan,
    pub stats: PlanStats,
    /// Heuristic the plan was packed with, `None` for bar jobs
    pub heuristic: Option<Heuristic>,
    pub time_ms: f64,
}

impl CutOptimizer {
    pub fn new(job: Job, config: CutOptConfig) -> Self {
        Self { job, config }
    }

    pub fn solve(&self) -> CutSolution {
        let start = Instant::now();

        let (plan, heuristic) = match &self.job {
            Job::Bar(job) => (Plan::Bars(pack_bars(job)), None),
            Job::Panel(job) => {
                let candidates = self.config.heuristic.candidates(job.heuristic);
                let (heuristic, plan) = select_best(job, &candidates)
                    .unwrap_or_else(|| (job.heuristic, pack_panels(job)));
                (Plan::Panels(plan), Some(heuristic))
            }
        };
        let stats = PlanStats::new(&plan);
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "[OPT] finished in {:.3}ms: {} part(s) on {} unit(s), {} unplaced, fill {:.2}%, waste {}",
            time_ms,
            stats.n_placed.separate_with_commas(),
            plan.n_stock_units(),
            stats.n_unplaced,
            stats.fill_bp as f64 / 100.0,
            stats.waste.separate_with_commas(),
        );

        CutSolution {
            plan,
            stats,
            heuristic,
            time_ms,
        }
    }
}

/// Packs `job` once per heuristic in parallel and returns the best plan.
///
/// Plans are ranked by fewest unplaced parts, then fewest bins, then the smallest used area
/// in the least filled bin (the largest reusable offcut), then heuristic declaration order.
/// Returns `None` if there are no candidates.
pub fn select_best(job: &PanelJob, candidates: &[Heuristic]) -> Option<(Heuristic, PanelPlan)> {
    let ranked = candidates
        .par_iter()
        .map(|&heuristic| {
            let job = PanelJob {
                heuristic,
                ..job.clone()
            };
            let plan = pack_panels(&job);
            let key = rank(&plan, heuristic);
            (key, heuristic, plan)
        })
        .collect::<Vec<_>>();

    for (key, heuristic, _) in ranked.iter() {
        debug!(
            "[OPT] {heuristic}: {} unplaced, {} bin(s), least filled bin uses {} mm²",
            key.0,
            key.1,
            key.2.separate_with_commas()
        );
    }

    let (_, heuristic, plan) = ranked.into_iter().min_by_key(|(key, _, _)| *key)?;

    info!("[OPT] selected heuristic {heuristic}");
    Some((heuristic, plan))
}

fn rank(plan: &PanelPlan, heuristic: Heuristic) -> (usize, usize, u64, Heuristic) {
    let least_filled = PlanStats::from_panel_plan(plan).least_filled_used();
    (plan.unplaced.len(), plan.bins.len(), least_filled, heuristic)
}

/// Short name of each heuristic, for logging
pub fn heuristic_names(heuristics: &[Heuristic]) -> String {
    heuristics.iter().map(|h| h.short_name()).join(", ")
}
