use cutstock::packing::Heuristic;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the cutting optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CutOptConfig {
    /// Which heuristic(s) to pack panel jobs with
    #[serde(default)]
    pub heuristic: HeuristicChoice,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Write one SVG per bin next to the solution file
    #[serde(default = "default_write_svg")]
    pub write_svg: bool,
}

/// `"auto"`, `"from_job"` or `{ "fixed": "<short name>" }`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicChoice {
    /// Pack with every heuristic and keep the best plan
    #[default]
    Auto,
    /// Pack with the heuristic named in the job
    FromJob,
    /// Pack with this heuristic only, regardless of the one in the job
    Fixed(Heuristic),
}

impl HeuristicChoice {
    /// Heuristics to pack with, in declaration order
    pub fn candidates(&self, job_heuristic: Heuristic) -> Vec<Heuristic> {
        match self {
            HeuristicChoice::Auto => Heuristic::ALL.to_vec(),
            HeuristicChoice::FromJob => vec![job_heuristic],
            HeuristicChoice::Fixed(h) => vec![*h],
        }
    }
}

fn default_write_svg() -> bool {
    true
}

impl Default for CutOptConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicChoice::Auto,
            svg_draw_options: SvgDrawOptions::default(),
            write_svg: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let config: CutOptConfig =
            serde_json::from_str(r#"{ "heuristic": { "fixed": "contact" }, "write_svg": false }"#)
                .unwrap();
        assert_eq!(config.heuristic, HeuristicChoice::Fixed(Heuristic::ContactPoint));
        assert!(!config.write_svg);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
    }

    #[test]
    fn empty_config_is_default() {
        let config: CutOptConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CutOptConfig::default());
        assert_eq!(config.heuristic.candidates(Heuristic::BottomLeft).len(), 5);
        assert_eq!(
            HeuristicChoice::FromJob.candidates(Heuristic::BottomLeft),
            vec![Heuristic::BottomLeft]
        );
    }
}
