use crate::domain::ports::{Document, Field};
use crate::utils::error::{Result, SlimError};
use serde_json::{Map, Value};

/// JSON 物件視為文件：巢狀物件為子文件，陣列為清單，沒有計算成員
pub type JsonDocument = Map<String, Value>;

pub fn json_document(value: Value) -> Result<JsonDocument> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SlimError::ConfigError {
            message: format!("document must be a JSON object, got {}", type_name(&other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn to_field(value: &Value) -> Field<'_> {
    match value {
        Value::Object(map) => Field::Document(map),
        Value::Array(items) => Field::List(items.iter().map(to_field).collect()),
        other => Field::Value(other.clone()),
    }
}

impl Document for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.get(name).map(to_field)
    }

    fn export(&self) -> Result<Map<String, Value>> {
        Ok(self.clone())
    }
}
