use crate::adapters::json::{json_document, JsonDocument};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// 讀取本機 JSON 文件
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<JsonDocument> {
    let data = fs::read(path)?;
    let value: serde_json::Value = serde_json::from_slice(&data)?;
    json_document(value)
}

pub fn write_output<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let full_path = path.as_ref();

    if let Some(parent) = full_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(full_path, data)?;
    Ok(())
}
