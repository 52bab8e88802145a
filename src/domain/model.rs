use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PATH_SEPARATOR: char = '.';
pub const SIGNATURE_SEPARATOR: &str = ",";

/// 呼叫計算成員時的參數：依位置或依名稱
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arguments {
    Positional(Vec<Value>),
    Keyword(Map<String, Value>),
}

impl Arguments {
    pub fn none() -> Self {
        Arguments::Positional(Vec::new())
    }

    /// 參數簽章：位置參數取值，名稱參數取名稱，以逗號串接
    pub fn signature(&self) -> String {
        match self {
            Arguments::Positional(values) => values
                .iter()
                .map(render_argument)
                .collect::<Vec<_>>()
                .join(SIGNATURE_SEPARATOR),
            Arguments::Keyword(kwargs) => kwargs
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(SIGNATURE_SEPARATOR),
        }
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        match self {
            Arguments::Positional(values) => values.get(index),
            Arguments::Keyword(_) => None,
        }
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        match self {
            Arguments::Positional(_) => None,
            Arguments::Keyword(kwargs) => kwargs.get(name),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Arguments::Positional(values) => values.len(),
            Arguments::Keyword(kwargs) => kwargs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Arguments::Positional(values)
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(kwargs: Map<String, Value>) -> Self {
        Arguments::Keyword(kwargs)
    }
}

fn render_argument(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 投影請求：欄位路徑（可含 `.`）或計算成員呼叫
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Field(String),
    Computed(String, Arguments),
}

impl PathSpec {
    pub fn field(path: impl Into<String>) -> Self {
        PathSpec::Field(path.into())
    }

    pub fn computed(name: impl Into<String>, args: impl Into<Arguments>) -> Self {
        PathSpec::Computed(name.into(), args.into())
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Field(path.to_string())
    }
}

/// 欄位路徑的單一步驟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep<'a> {
    Leaf(&'a str),
    Nested { head: &'a str, rest: &'a str },
}

impl<'a> PathStep<'a> {
    pub fn parse(path: &'a str) -> Self {
        match path.split_once(PATH_SEPARATOR) {
            Some((head, rest)) => PathStep::Nested { head, rest },
            None => PathStep::Leaf(path),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection {
    pub data: Map<String, Value>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}

impl From<Map<String, Value>> for Projection {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for Projection {
    type Error = crate::utils::error::SlimError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(crate::utils::error::SlimError::Construction {
                message: format!("projection must be a JSON object, got {}", other),
            }),
        }
    }
}

/// 投影結果；結果為空時退回原始文件
#[derive(Debug)]
pub enum Minimized<'a, D: ?Sized> {
    Projection(Projection),
    Original(&'a D),
}

impl<'a, D: ?Sized> Minimized<'a, D> {
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            Minimized::Projection(p) => Some(p),
            Minimized::Original(_) => None,
        }
    }

    pub fn into_projection(self) -> Option<Projection> {
        match self {
            Minimized::Projection(p) => Some(p),
            Minimized::Original(_) => None,
        }
    }

    pub fn is_original(&self) -> bool {
        matches!(self, Minimized::Original(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_signature() {
        let args = Arguments::Positional(vec![json!(3), json!("north"), json!(true)]);
        assert_eq!(args.signature(), "3,north,true");
        assert_eq!(Arguments::none().signature(), "");
    }

    #[test]
    fn test_keyword_signature_keeps_insertion_order() {
        let args: Arguments = serde_json::from_value(json!({"zeta": 1, "alpha": 2})).unwrap();
        assert_eq!(args.signature(), "zeta,alpha");
        assert_eq!(args.keyword("alpha"), Some(&json!(2)));
    }

    #[test]
    fn test_path_step_parse() {
        assert_eq!(PathStep::parse("name"), PathStep::Leaf("name"));
        assert_eq!(
            PathStep::parse("author.address.city"),
            PathStep::Nested {
                head: "author",
                rest: "address.city"
            }
        );
    }

    #[test]
    fn test_path_spec_deserialize() {
        let specs: Vec<PathSpec> =
            serde_json::from_value(json!(["title", ["score", [3]], ["rank", {"by": "votes"}]]))
                .unwrap();
        assert_eq!(specs[0], PathSpec::field("title"));
        assert_eq!(specs[1], PathSpec::computed("score", vec![json!(3)]));
        assert!(matches!(&specs[2], PathSpec::Computed(name, Arguments::Keyword(_)) if name == "rank"));
    }
}
