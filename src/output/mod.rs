// Output module - Output formatting (Terminal, JSON, CSV)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    JsonPretty,
}

pub mod csv;
pub mod json;
pub mod report;
pub mod terminal;

pub use report::RiskReport;
