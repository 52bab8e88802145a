#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use slimdoc::{construct_from_fields, Arguments, Document, Field, Member, Reassemble, Result, SlimError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id")]
    pub id: u64,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: u64,
    pub title: String,
    pub pages: u32,
    pub edition: u32,
    pub publisher: Option<String>,
    pub author: Author,
    pub reviewers: Vec<Author>,
}

fn to_map<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(SlimError::SerializationError(serde::ser::Error::custom(format!(
            "expected an object, got {}",
            other
        )))),
    }
}

impl Document for Author {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "id" => Some(Field::Value(json!(self.id))),
            "name" => Some(Field::Value(json!(self.name))),
            "country" => Some(Field::Value(json!(self.country))),
            _ => None,
        }
    }

    fn export(&self) -> Result<Map<String, Value>> {
        to_map(self)
    }
}

impl Document for Book {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "id" => Some(Field::Value(json!(self.id))),
            "title" => Some(Field::Value(json!(self.title))),
            "pages" => Some(Field::Value(json!(self.pages))),
            "edition" => Some(Field::Value(json!(self.edition))),
            "publisher" => Some(Field::Value(json!(self.publisher))),
            "author" => Some(Field::Document(&self.author)),
            "reviewers" => Some(Field::List(
                self.reviewers
                    .iter()
                    .map(|reviewer| Field::Document(reviewer))
                    .collect(),
            )),
            _ => None,
        }
    }

    fn member(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "score" => Some(Box::new(|args: &Arguments| -> Result<Value> {
                let weight = args
                    .positional(0)
                    .and_then(Value::as_i64)
                    .ok_or_else(|| SlimError::Invocation {
                        member: "score".to_string(),
                        message: "expects one integer weight".to_string(),
                    })?;
                Ok(json!(weight * 2))
            })),
            "pages_per_day" => Some(Box::new(move |args: &Arguments| -> Result<Value> {
                let days = args.keyword("days").and_then(Value::as_u64).unwrap_or(1).max(1);
                Ok(json!(u64::from(self.pages) / days))
            })),
            "summary" => Some(Box::new(move |_: &Arguments| -> Result<Value> {
                Ok(json!(format!("{} by {}", self.title, self.author.name)))
            })),
            _ => None,
        }
    }

    fn export(&self) -> Result<Map<String, Value>> {
        to_map(self)
    }
}

impl Reassemble for Book {
    fn declares(name: &str) -> bool {
        matches!(
            name,
            "id" | "title" | "pages" | "edition" | "publisher" | "author" | "reviewers"
        )
    }

    fn construct(fields: Map<String, Value>) -> Result<Self> {
        construct_from_fields(fields)
    }
}

pub fn sample_book() -> Book {
    Book {
        id: 42,
        title: "Dune".to_string(),
        pages: 412,
        edition: 1,
        publisher: None,
        author: Author {
            id: 7,
            name: "Frank Herbert".to_string(),
            country: Some("US".to_string()),
        },
        reviewers: vec![
            Author {
                id: 8,
                name: "Ann".to_string(),
                country: None,
            },
            Author {
                id: 9,
                name: "Bo".to_string(),
                country: Some("SE".to_string()),
            },
        ],
    }
}
