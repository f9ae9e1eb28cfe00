use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::RankingsReport;

/// Render the report as a two-list tuple, athlete names first.
pub fn render_report(report: &RankingsReport) -> Result<String> {
    let athletes =
        serde_json::to_string(&report.best_athletes).context("serialize athlete rankings")?;
    let coaches = serde_json::to_string(&report.top_coaches).context("serialize coach rankings")?;
    Ok(format!("({athletes},{coaches})"))
}

pub fn write_report(path: &Path, report: &RankingsReport) -> Result<()> {
    let rendered = render_report(report)?;
    fs::write(path, rendered).with_context(|| format!("write results to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_as_tuple_of_lists() {
        let report = RankingsReport {
            best_athletes: vec!["ALICE".to_string(), "BOB".to_string()],
            top_coaches: vec!["CARTER".to_string()],
        };
        let rendered = render_report(&report).expect("render should succeed");
        assert_eq!(rendered, r#"(["ALICE","BOB"],["CARTER"])"#);
    }

    #[test]
    fn empty_report_renders_empty_lists() {
        let report = RankingsReport {
            best_athletes: Vec::new(),
            top_coaches: Vec::new(),
        };
        let rendered = render_report(&report).expect("render should succeed");
        assert_eq!(rendered, "([],[])");
    }

    #[test]
    fn apostrophes_survive_rendering() {
        let report = RankingsReport {
            best_athletes: vec!["O'BRIEN".to_string()],
            top_coaches: Vec::new(),
        };
        let rendered = render_report(&report).expect("render should succeed");
        assert_eq!(rendered, r#"(["O'BRIEN"],[])"#);
    }
}
