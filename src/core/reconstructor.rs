use crate::domain::model::{Arguments, Projection};
use crate::domain::ports::{Document, Field, Member, Reassemble};
use crate::utils::error::{Result, SlimError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::ops::Deref;

/// 重建後的物件：目標實例加上計算成員的記錄值
#[derive(Debug, Clone)]
pub struct Reassembled<T> {
    inner: T,
    recorded: HashMap<String, Map<String, Value>>,
}

impl<T> Reassembled<T> {
    /// 以相同簽章查詢記錄值；沒記錄時回傳 None，不會重新計算
    pub fn call(&self, name: &str, args: &Arguments) -> Option<&Value> {
        self.recorded.get(name)?.get(&args.signature())
    }

    pub fn is_substituted(&self, name: &str) -> bool {
        self.recorded.contains_key(name)
    }

    pub fn recorded(&self, name: &str) -> Option<&Map<String, Value>> {
        self.recorded.get(name)
    }

    pub fn substituted_members(&self) -> impl Iterator<Item = &str> {
        self.recorded.keys().map(String::as_str)
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Deref for Reassembled<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Document> Document for Reassembled<T> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.inner.field(name)
    }

    fn member(&self, name: &str) -> Option<Member<'_>> {
        match self.recorded.get(name) {
            Some(executions) => Some(Box::new(move |args: &Arguments| -> Result<Value> {
                Ok(executions
                    .get(&args.signature())
                    .cloned()
                    .unwrap_or(Value::Null))
            })),
            None => self.inner.member(name),
        }
    }

    fn export(&self) -> Result<Map<String, Value>> {
        self.inner.export()
    }

    fn storage_id_field(&self) -> &str {
        self.inner.storage_id_field()
    }
}

/// 由投影重建目標型別
pub fn reassemble<T: Reassemble>(projection: Projection) -> Result<Reassembled<T>> {
    let mut data = Map::new();
    let mut recorded = HashMap::new();

    // 先取得完整快照再分類，不在走訪中移除項目
    for (key, value) in projection.data {
        if T::declares(&key) {
            data.insert(key, value);
            continue;
        }

        match value {
            Value::Object(executions) => {
                tracing::trace!("Substituting '{}' with {} recorded call(s)", key, executions.len());
                recorded.insert(key, executions);
            }
            other => {
                return Err(SlimError::Construction {
                    message: format!(
                        "'{}' is not a declared field and its value is not a recorded call table: {}",
                        key, other
                    ),
                });
            }
        }
    }

    tracing::debug!(
        "Reassembling from {} field(s) and {} substituted member(s)",
        data.len(),
        recorded.len()
    );

    let inner = T::construct(data)?;
    Ok(Reassembled { inner, recorded })
}
