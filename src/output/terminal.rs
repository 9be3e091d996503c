// Terminal Output Module - calculation results and the risk dashboard

use crate::input::ImportSummary;
use crate::rating::{CvssResult, Severity};
use crate::store::RiskRegister;
use crate::utils::DisplayConfig;
use std::fmt;

/// A single base score calculation, rendered for the terminal
pub struct CalculationView<'a> {
    pub result: &'a CvssResult,
    pub vector: &'a str,
    pub display: &'a DisplayConfig,
}

impl fmt::Display for CalculationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self.display;
        writeln!(
            f,
            "{} {}",
            display.heading("CVSS v3.1 Base Score:"),
            display.severity_label(self.result.severity, Some(self.result.score))
        )?;
        writeln!(f, "  Impact:         {:.1}", self.result.impact)?;
        writeln!(f, "  Exploitability: {:.1}", self.result.exploitability)?;
        writeln!(f, "  Vector:         {}", self.vector)
    }
}

/// Import summary with one line per skipped row
pub struct ImportSummaryView<'a> {
    pub summary: &'a ImportSummary,
    pub display: &'a DisplayConfig,
}

impl fmt::Display for ImportSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            self.display.success_color("Imported:"),
            self.summary.imported
        )?;
        writeln!(
            f,
            "{} {}",
            self.display.warning_color("Skipped invalid rows:"),
            self.summary.skipped
        )?;
        for failure in &self.summary.failures {
            writeln!(
                f,
                "  row {}: {} / {} - {}",
                failure.row, failure.asset, failure.title, failure.error
            )?;
        }
        Ok(())
    }
}

/// The dashboard: counts, latest findings, ranked assets and their findings
pub struct Dashboard<'a> {
    pub register: &'a RiskRegister,
    pub latest_limit: usize,
    pub min_severity: Severity,
    pub display: &'a DisplayConfig,
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self.display;
        let register = self.register;

        writeln!(f, "{}", display.heading("Findings by Severity"))?;
        let counts = register.severity_counts();
        for severity in Severity::ALL {
            writeln!(
                f,
                "  {:<10}{}",
                display.severity_color(severity, severity.as_str()),
                counts.get(severity)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{}", display.heading("Latest Findings"))?;
        let latest = register.latest_findings(self.latest_limit);
        if latest.is_empty() {
            writeln!(f, "  No findings yet.")?;
        }
        for finding in latest {
            writeln!(
                f,
                "  {:<24} {:<40} {}",
                finding.asset_name,
                finding.title,
                display.severity_label(finding.severity, Some(finding.score))
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{}", display.heading("Attack Surface"))?;
        let ranked = register.ranked_assets();
        if ranked.is_empty() {
            writeln!(f, "  No tracked assets.")?;
        }
        for entry in &ranked {
            writeln!(
                f,
                "  {:<28} Findings: {:<4} Max: {:.1}  Avg: {:.1}",
                entry.asset.name,
                entry.risk.finding_count,
                entry.risk.max_score,
                entry.risk.avg_score
            )?;
            if !entry.asset.tags.is_empty() {
                writeln!(f, "    Tags:     {}", entry.asset.tags.join(", "))?;
            }
            if !entry.asset.services.is_empty() {
                writeln!(f, "    Services: {}", entry.asset.services.join(", "))?;
            }
            for finding in register
                .findings_for_asset(&entry.asset.name)
                .into_iter()
                .filter(|finding| finding.severity >= self.min_severity)
            {
                writeln!(
                    f,
                    "    {} {} [{}]",
                    display.severity_label(finding.severity, Some(finding.score)),
                    finding.title,
                    finding.metrics.short_form()
                )?;
            }
        }

        let untracked = register.untracked_asset_names();
        if !untracked.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{} {}",
                display.warning_color("Findings on untracked assets:"),
                untracked.join(", ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> DisplayConfig {
        colored::control::set_override(false);
        DisplayConfig::default()
    }

    #[test]
    fn test_calculation_view() {
        let result = CvssResult {
            score: 9.8,
            severity: Severity::Critical,
            impact: 5.9,
            exploitability: 3.9,
        };
        let display = plain();
        let out = CalculationView {
            result: &result,
            vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
            display: &display,
        }
        .to_string();

        assert!(out.contains("9.8 Critical"));
        assert!(out.contains("Impact:         5.9"));
        assert!(out.contains("Exploitability: 3.9"));
    }

    #[test]
    fn test_dashboard_empty() {
        let register = RiskRegister::new();
        let display = plain();
        let out = Dashboard {
            register: &register,
            latest_limit: 10,
            min_severity: Severity::None,
            display: &display,
        }
        .to_string();

        assert!(out.contains("No findings yet."));
        assert!(out.contains("No tracked assets."));
    }

    #[test]
    fn test_dashboard_lists_ranked_assets_and_untracked() {
        let mut register = RiskRegister::new();
        register
            .upsert_asset("web-01", &["prod".to_string()], &["443/https".to_string()])
            .unwrap();
        let metrics = [
            ("AV", "N"),
            ("AC", "L"),
            ("PR", "N"),
            ("UI", "N"),
            ("S", "U"),
            ("C", "H"),
            ("I", "N"),
            ("A", "N"),
        ];
        register.add_finding("web-01", "Info leak", &metrics[..]).unwrap();
        register.add_finding("stray-host", "Other", &metrics[..]).unwrap();

        let display = plain();
        let out = Dashboard {
            register: &register,
            latest_limit: 10,
            min_severity: Severity::None,
            display: &display,
        }
        .to_string();
        assert!(out.contains("web-01"));
        assert!(out.contains("Max: 7.5"));
        assert!(out.contains("7.5 High Info leak [AV:N AC:L PR:N UI:N S:U C:H I:N A:N]"));
        assert!(out.contains("Tags:     prod"));
        assert!(out.contains("Findings on untracked assets: stray-host"));
    }

    #[test]
    fn test_import_summary_lists_failures() {
        let records = crate::input::parse_csv_text(
            "asset,title,AV,AC,PR,UI,S,C,I,A\nweb-01,Broken,Z,L,N,R,U,L,L,N\n",
        )
        .unwrap();
        let mut register = RiskRegister::new();
        let summary = crate::input::import_records(&mut register, &records);

        let display = plain();
        let out = ImportSummaryView {
            summary: &summary,
            display: &display,
        }
        .to_string();
        assert!(out.contains("Imported: 0"));
        assert!(out.contains("Skipped invalid rows: 1"));
        assert!(out.contains("row 1: web-01 / Broken - Invalid AV: 'Z'"));
    }

    #[test]
    fn test_dashboard_hides_findings_below_min_severity() {
        let mut register = RiskRegister::new();
        register.upsert_asset("web-01", &[], &[]).unwrap();
        let low = [
            ("AV", "N"),
            ("AC", "H"),
            ("PR", "N"),
            ("UI", "R"),
            ("S", "U"),
            ("C", "L"),
            ("I", "N"),
            ("A", "N"),
        ];
        register.add_finding("web-01", "Banner", &low[..]).unwrap();

        let display = plain();
        let out = Dashboard {
            register: &register,
            latest_limit: 0,
            min_severity: Severity::High,
            display: &display,
        }
        .to_string();
        assert!(out.contains("Findings: 1"));
        assert!(!out.contains("[AV:N AC:H"));
    }
}
