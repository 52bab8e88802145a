pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "slimdoc")]
#[command(about = "Project selected fields of a JSON document")]
pub struct CliConfig {
    #[arg(long, help = "JSON document to project")]
    pub document: String,

    #[arg(long, help = "TOML projection plan")]
    pub plan: Option<String>,

    #[arg(long = "field", help = "Extra field path to project (repeatable)")]
    pub fields: Vec<String>,

    #[arg(long, help = "Write the result to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Fail on dotted paths that cross a non-document value")]
    pub strict: bool,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("document", &self.document)?;

        if let Some(plan) = &self.plan {
            validation::validate_path("plan", plan)?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        for (index, field) in self.fields.iter().enumerate() {
            validation::validate_field_path(&format!("field[{}]", index), field)?;
        }

        Ok(())
    }
}
