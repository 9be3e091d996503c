// CVSS base metric arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::rating::MetricLookup;
use clap::Args;

/// CVSS v3.1 base metrics given one flag per metric
///
/// Values are passed through raw; the scoring engine normalizes and
/// validates them, so `--av n` and `--av " N"` are both accepted.
#[derive(Args, Debug, Clone, Default)]
pub struct MetricArgs {
    /// Attack Vector (N, A, L, P)
    #[arg(long = "av", value_name = "CODE")]
    pub attack_vector: Option<String>,

    /// Attack Complexity (L, H)
    #[arg(long = "ac", value_name = "CODE")]
    pub attack_complexity: Option<String>,

    /// Privileges Required (N, L, H)
    #[arg(long = "pr", value_name = "CODE")]
    pub privileges_required: Option<String>,

    /// User Interaction (N, R)
    #[arg(long = "ui", value_name = "CODE")]
    pub user_interaction: Option<String>,

    /// Scope (U, C)
    #[arg(long = "s", visible_alias = "scope", value_name = "CODE")]
    pub scope: Option<String>,

    /// Confidentiality impact (H, L, N)
    #[arg(long = "c", visible_alias = "confidentiality", value_name = "CODE")]
    pub confidentiality: Option<String>,

    /// Integrity impact (H, L, N)
    #[arg(long = "i", visible_alias = "integrity", value_name = "CODE")]
    pub integrity: Option<String>,

    /// Availability impact (H, L, N)
    #[arg(long = "a", visible_alias = "availability", value_name = "CODE")]
    pub availability: Option<String>,
}

impl MetricArgs {
    /// Whether any metric flag was given
    pub fn any(&self) -> bool {
        [
            &self.attack_vector,
            &self.attack_complexity,
            &self.privileges_required,
            &self.user_interaction,
            &self.scope,
            &self.confidentiality,
            &self.integrity,
            &self.availability,
        ]
        .iter()
        .any(|m| m.is_some())
    }
}

impl MetricLookup for MetricArgs {
    fn metric(&self, key: &str) -> Option<&str> {
        let value = match key {
            "AV" => &self.attack_vector,
            "AC" => &self.attack_complexity,
            "PR" => &self.privileges_required,
            "UI" => &self.user_interaction,
            "S" => &self.scope,
            "C" => &self.confidentiality,
            "I" => &self.integrity,
            "A" => &self.availability,
            _ => return None,
        };
        value.as_deref()
    }
}
