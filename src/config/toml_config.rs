use crate::core::projector::MinimizeOptions;
use crate::domain::model::PathSpec;
use crate::utils::error::{Result, SlimError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 投影計畫
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub plan: PlanSection,
    #[serde(default)]
    pub options: MinimizeOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSection {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Vec<PathSpec>,
}

impl PlanConfig {
    /// 從 TOML 檔案載入計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: PlanConfig = toml::from_str(&processed_content)?;
        tracing::debug!(
            "Loaded plan '{}' with {} spec(s)",
            config.plan.name,
            config.plan.specs.len()
        );
        Ok(config)
    }

    /// 替換環境變數 (例如 ${FIELD_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SlimError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn specs(&self) -> &[PathSpec] {
        &self.plan.specs
    }

    pub fn options(&self) -> &MinimizeOptions {
        &self.options
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("plan.name", &self.plan.name)?;
        validation::validate_non_empty_string("options.id_field", &self.options.id_field)?;

        for (index, spec) in self.plan.specs.iter().enumerate() {
            validation::validate_path_spec(&format!("plan.specs[{}]", index), spec)?;
        }

        Ok(())
    }
}
