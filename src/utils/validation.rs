use crate::domain::model::{PathSpec, PATH_SEPARATOR};
use crate::utils::error::{Result, SlimError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SlimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SlimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SlimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 欄位路徑的每一段都必須有名稱（`a..b`、`.a` 不合法）
pub fn validate_field_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.split(PATH_SEPARATOR).any(|segment| segment.trim().is_empty()) {
        return Err(SlimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Path segments separated by '{}' cannot be empty", PATH_SEPARATOR),
        });
    }

    Ok(())
}

pub fn validate_path_spec(field_name: &str, spec: &PathSpec) -> Result<()> {
    match spec {
        PathSpec::Field(path) => validate_field_path(field_name, path),
        PathSpec::Computed(name, _) => {
            validate_non_empty_string(field_name, name)?;
            if name.contains(PATH_SEPARATOR) {
                return Err(SlimError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: name.clone(),
                    reason: "Member names cannot be dotted paths".to_string(),
                });
            }
            Ok(())
        }
    }
}
