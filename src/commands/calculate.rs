// CalculateCommand - Single CVSS v3.1 base score calculation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, resolve_config};
use crate::error::RiskMapperError;
use crate::output::OutputFormat;
use crate::output::json::calculation_json;
use crate::output::terminal::CalculationView;
use crate::rating::{CvssCalculator, CvssResult, MetricSet, calculate_base_score, vector_string};
use crate::utils::DisplayConfig;
use crate::{Args, Result};
use tracing::debug;

/// CalculateCommand scores one set of base metrics
///
/// Metrics come either from `--vector` or from the eight metric flags.
/// With flags, the score and the vector string are each produced by
/// validating the raw values independently.
pub struct CalculateCommand {
    args: Args,
}

impl CalculateCommand {
    /// Create a new CalculateCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Score the requested metrics and return the result with its canonical vector
    pub fn calculate(&self) -> Result<(CvssResult, String)> {
        match &self.args.vector {
            Some(vector) => {
                let metrics: MetricSet = vector.parse()?;
                Ok((CvssCalculator::score(&metrics), metrics.to_string()))
            }
            None => {
                let result = calculate_base_score(&self.args.metrics)?;
                let vector = vector_string(&self.args.metrics)?;
                Ok((result, vector))
            }
        }
    }

    /// Text printed to stdout for the selected output format
    pub fn render(&self, result: &CvssResult, vector: &str, colorblind: bool) -> Result<String> {
        let text = match self.args.output.output_format {
            OutputFormat::Terminal => {
                let display = DisplayConfig::new(colorblind);
                CalculationView {
                    result,
                    vector,
                    display: &display,
                }
                .to_string()
            }
            format => {
                let mut json = calculation_json(result, vector, format == OutputFormat::JsonPretty)?;
                json.push('\n');
                json
            }
        };
        Ok(text)
    }
}

impl Command for CalculateCommand {
    fn execute(&self) -> Result<()> {
        let config = resolve_config(&self.args)?;
        let (result, vector) = self.calculate()?;
        debug!(score = result.score, vector = %vector, "Calculated base score");

        print!("{}", self.render(&result, &vector, config.colorblind)?);

        if let Some(path) = &self.args.output.json {
            let json = calculation_json(&result, &vector, self.args.output.json_pretty)?;
            std::fs::write(path, json).map_err(|e| RiskMapperError::FileSystemError {
                path: path.display().to_string(),
                source: e,
            })?;
            println!("Calculation written to {}", path.display());
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "CalculateCommand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CvssError;
    use crate::rating::Severity;

    fn flags(values: [&str; 8]) -> Args {
        let mut args = Args::default();
        let m = &mut args.metrics;
        let [av, ac, pr, ui, s, c, i, a] = values.map(|v| Some(v.to_string()));
        m.attack_vector = av;
        m.attack_complexity = ac;
        m.privileges_required = pr;
        m.user_interaction = ui;
        m.scope = s;
        m.confidentiality = c;
        m.integrity = i;
        m.availability = a;
        args
    }

    #[test]
    fn test_calculate_from_flags() {
        let cmd = CalculateCommand::new(flags(["n", " L", "N", "N", "u", "H", "H", "H"]));
        let (result, vector) = cmd.calculate().expect("valid metrics");
        assert_eq!(result.score, 9.8);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(vector, "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    }

    #[test]
    fn test_calculate_from_vector() {
        let mut args = Args::default();
        args.vector = Some("CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:C/C:H/I:H/A:H".to_string());
        let (result, vector) = CalculateCommand::new(args).calculate().expect("valid vector");
        assert_eq!(result.score, 9.9);
        assert_eq!(vector, "CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:C/C:H/I:H/A:H");
    }

    #[test]
    fn test_calculate_missing_flag() {
        let mut args = flags(["N", "L", "N", "N", "U", "H", "H", "H"]);
        args.metrics.privileges_required = None;
        let err = CalculateCommand::new(args).calculate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CvssError>(),
            Some(&CvssError::MissingMetric { key: "PR" })
        );
    }

    #[test]
    fn test_calculate_invalid_flag() {
        let args = flags(["X", "L", "N", "N", "U", "H", "H", "H"]);
        let err = CalculateCommand::new(args).calculate().unwrap_err();
        assert_eq!(err.downcast_ref::<CvssError>().and_then(CvssError::key), Some("AV"));
    }

    #[test]
    fn test_calculate_bad_vector() {
        let mut args = Args::default();
        args.vector = Some("AV:N/AC:L".to_string());
        assert!(CalculateCommand::new(args).calculate().is_err());
    }

    #[test]
    fn test_render_json_pretty() {
        let mut args = Args::default();
        args.vector = Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string());
        args.output.output_format = OutputFormat::JsonPretty;
        let cmd = CalculateCommand::new(args);

        let (result, vector) = cmd.calculate().unwrap();
        let out = cmd.render(&result, &vector, false).unwrap();
        assert!(out.trim_end().contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["score"], 9.8);
    }

    #[test]
    fn test_render_json_compact() {
        let mut args = Args::default();
        args.vector = Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string());
        args.output.output_format = OutputFormat::Json;
        let cmd = CalculateCommand::new(args);

        let (result, vector) = cmd.calculate().unwrap();
        let out = cmd.render(&result, &vector, false).unwrap();
        assert!(!out.trim_end().contains('\n'));
    }

    #[test]
    fn test_execute_writes_pretty_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("score.json");

        let mut args = Args::default();
        args.vector = Some("CVSS:3.1/AV:N/AC:H/PR:N/UI:R/S:U/C:L/I:N/A:N".to_string());
        args.output.json = Some(path.clone());
        args.output.json_pretty = true;
        args.output.output_format = OutputFormat::Json;
        CalculateCommand::new(args).execute().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"score\": 3.1"));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(CalculateCommand::new(Args::default()).name(), "CalculateCommand");
    }
}
