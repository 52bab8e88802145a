use crate::domain::model::Arguments;
use crate::utils::error::{Result, SlimError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const STORAGE_ID_FIELD: &str = "_id";

/// 已繫結的計算成員
pub type Member<'a> = Box<dyn Fn(&Arguments) -> Result<Value> + 'a>;

/// 文件欄位值；巢狀文件與一般值明確區分
pub enum Field<'a> {
    Value(Value),
    Document(&'a dyn Document),
    List(Vec<Field<'a>>),
}

impl<'a> Field<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Value(Value::Null))
    }
}

/// 可被投影的領域物件
pub trait Document {
    fn field(&self, name: &str) -> Option<Field<'_>>;

    fn member(&self, _name: &str) -> Option<Member<'_>> {
        None
    }

    /// 匯出為扁平欄位表示（儲存層欄位名稱）
    fn export(&self) -> Result<Map<String, Value>>;

    fn storage_id_field(&self) -> &str {
        STORAGE_ID_FIELD
    }
}

/// 可由投影重建的目標型別
pub trait Reassemble: Sized {
    /// 是否為建構時接受的資料欄位；其餘 key 視為計算成員的記錄
    fn declares(name: &str) -> bool;

    fn construct(fields: Map<String, Value>) -> Result<Self>;
}

/// 以 serde 反序列化建構目標型別
pub fn construct_from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| SlimError::Construction {
        message: e.to_string(),
    })
}
