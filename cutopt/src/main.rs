use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutopt::config::{CutOptConfig, HeuristicChoice};
use cutopt::io;
use cutopt::io::cli::Cli;
use cutopt::io::output::CutOptOutput;
use cutopt::io::plan_to_svg::bin_to_svg;
use cutopt::optimizer::{CutOptimizer, heuristic_names};
use cutstock::entities::Job;
use cutstock::io::{export, import};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CutOptConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(heuristic) = args.heuristic {
        config.heuristic = HeuristicChoice::Fixed(heuristic);
    }

    info!("Successfully parsed CutOptConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_job = io::read_job(args.input_file.as_path())?;
    let job = import::import(&ext_job).context("invalid job")?;
    if let Job::Panel(panel_job) = &job {
        info!(
            "[MAIN] packing {} part(s) with {}",
            panel_job.parts.len(),
            heuristic_names(&config.heuristic.candidates(panel_job.heuristic))
        );
    }
    let kerf = match &job {
        Job::Panel(job) => job.kerf,
        Job::Bar(job) => job.kerf,
    };

    let solution = CutOptimizer::new(job, config).solve();
    for unplaced in solution.plan.unplaced() {
        warn!(
            "[MAIN] part {} could not be placed: {:?}",
            unplaced.part_id, unplaced.reason
        );
    }
    let ext_plan = export::export(&solution.plan);

    if config.write_svg {
        for (bin, unit_stats) in ext_plan.bins.iter().zip(ext_plan.stats.units.iter()) {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}_{}.svg", bin.index));
            let title = solution.heuristic.map_or(String::new(), |h| h.to_string());
            let svg = bin_to_svg(bin, unit_stats, kerf, config.svg_draw_options, &title);

            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    {
        let output = CutOptOutput {
            job: ext_job,
            plan: ext_plan,
            packed_with: solution.heuristic.map(|h| h.short_name().to_string()),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    Ok(())
}
