use crate::domain::model::{Arguments, Minimized, PathSpec, PathStep, Projection};
use crate::domain::ports::{Document, Field};
use crate::utils::error::{Result, SlimError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CANONICAL_ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimizeOptions {
    /// 匯出子文件時識別欄位改用的名稱
    pub id_field: String,
    /// 巢狀路徑經過非文件值時回報錯誤，而不是略過
    pub strict_nested_paths: bool,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            id_field: CANONICAL_ID_FIELD.to_string(),
            strict_nested_paths: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Projector {
    options: MinimizeOptions,
}

impl Projector {
    pub fn new(options: MinimizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MinimizeOptions {
        &self.options
    }

    /// 依 path spec 投影文件；結果為空時回傳原始文件
    pub fn minimize<'a, D: Document>(
        &self,
        doc: &'a D,
        specs: &[PathSpec],
    ) -> Result<Minimized<'a, D>> {
        let projection = self.project(doc, specs)?;

        if projection.is_empty() {
            tracing::debug!(
                "Projection of {} spec(s) is empty, returning original document",
                specs.len()
            );
            return Ok(Minimized::Original(doc));
        }

        tracing::debug!("Projected {} top-level key(s)", projection.len());
        Ok(Minimized::Projection(projection))
    }

    /// 依 path spec 投影文件，不套用空結果退回
    pub fn project(&self, doc: &dyn Document, specs: &[PathSpec]) -> Result<Projection> {
        let mut result = Map::new();

        for spec in specs {
            match spec {
                PathSpec::Computed(name, args) => {
                    self.project_member(doc, name, args, &mut result)?
                }
                PathSpec::Field(path) => self.project_path(doc, path, path, &mut result)?,
            }
        }

        Ok(Projection::from(result))
    }

    fn project_member(
        &self,
        doc: &dyn Document,
        name: &str,
        args: &Arguments,
        result: &mut Map<String, Value>,
    ) -> Result<()> {
        let member = doc.member(name).ok_or_else(|| SlimError::MissingMember {
            name: name.to_string(),
        })?;

        let signature = args.signature();
        let value = member(args).map_err(|e| SlimError::Invocation {
            member: name.to_string(),
            message: e.to_string(),
        })?;

        tracing::trace!("Recorded {}({}) = {}", name, signature, value);
        sub_map(result, name).insert(signature, value);
        Ok(())
    }

    fn project_path(
        &self,
        doc: &dyn Document,
        full_path: &str,
        path: &str,
        result: &mut Map<String, Value>,
    ) -> Result<()> {
        match PathStep::parse(path) {
            PathStep::Leaf(name) => {
                let field = doc
                    .field(name)
                    .filter(|field| !field.is_null())
                    .ok_or_else(|| SlimError::MissingField {
                        name: name.to_string(),
                    })?;

                let value = self.capture(field)?;
                result.insert(name.to_string(), value);
            }
            PathStep::Nested { head, rest } => {
                let field = doc.field(head).ok_or_else(|| SlimError::MissingField {
                    name: head.to_string(),
                })?;

                match field {
                    Field::Document(sub) => {
                        tracing::trace!("Descending into '{}' for '{}'", head, rest);
                        self.project_path(sub, full_path, rest, sub_map(result, head))?;
                    }
                    _ if self.options.strict_nested_paths => {
                        return Err(SlimError::NotADocument {
                            path: full_path.to_string(),
                        });
                    }
                    _ => {
                        tracing::warn!(
                            "⚠️ Skipping '{}': '{}' is not a document",
                            full_path,
                            head
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn capture(&self, field: Field<'_>) -> Result<Value> {
        match field {
            Field::Value(value) => Ok(value),
            Field::Document(doc) => self.export_normalized(doc).map(Value::Object),
            Field::List(items) => items
                .into_iter()
                .map(|item| self.capture(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
        }
    }

    /// 匯出副本，並把儲存層識別欄位改名為標準名稱
    fn export_normalized(&self, doc: &dyn Document) -> Result<Map<String, Value>> {
        let mut exported = doc.export()?;
        let id = exported
            .remove(doc.storage_id_field())
            .unwrap_or(Value::Null);
        exported.insert(self.options.id_field.clone(), id);
        Ok(exported)
    }
}

/// 取得 key 對應的子物件，必要時建立
fn sub_map<'m>(result: &'m mut Map<String, Value>, key: &str) -> &'m mut Map<String, Value> {
    let slot = result
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }

    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}

pub fn minimize<'a, D: Document>(doc: &'a D, specs: &[PathSpec]) -> Result<Minimized<'a, D>> {
    Projector::default().minimize(doc, specs)
}
