//! JSONファイルのテンプレートストア
//!
//! TinyDB互換のドキュメント形式で保存する:
//!
//! ```json
//! {"_default": {}, "templates": {"1": {"name": "A", "login": "email"}}}
//! ```
//!
//! テーブル内のキーはドキュメントID（1始まりの連番文字列）。

use form_matcher_common::{Error, Result, Template, TemplateStore};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TABLE_NAME: &str = "templates";

/// ファイルに保存するテンプレートストア
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    document: Map<String, Value>,
}

impl JsonFileStore {
    /// ストアファイルを開く
    ///
    /// ファイルが無い、または空の場合は空のストアとして扱う。
    pub fn open(path: &Path) -> Result<Self> {
        let document = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&content)? {
                    Value::Object(obj) => obj,
                    _ => {
                        return Err(Error::Store(format!(
                            "{}: root is not an object",
                            path.display()
                        )))
                    }
                }
            }
        } else {
            Map::new()
        };

        if let Some(table) = document.get(TABLE_NAME) {
            if !table.is_object() {
                return Err(Error::Store(format!(
                    "{}: \"{}\" table is not an object",
                    path.display(),
                    TABLE_NAME
                )));
            }
        }

        debug!(path = %path.display(), "opened template store");
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// (ドキュメントID, レコード) をID順で返す
    fn entries(&self) -> Vec<(u64, &Value)> {
        let Some(table) = self.document.get(TABLE_NAME).and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut entries: Vec<(u64, &Value)> = table
            .iter()
            .filter_map(|(id, record)| match id.parse::<u64>() {
                Ok(id) => Some((id, record)),
                Err(_) => {
                    warn!(id = %id, "skipping record with non-numeric document id");
                    None
                }
            })
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.document)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl TemplateStore for JsonFileStore {
    fn insert(&mut self, template: &Template) -> Result<u64> {
        let next_id = match self.entries().last() {
            Some((id, _)) => id.checked_add(1).ok_or_else(|| {
                Error::Store(format!("document id {} cannot be incremented", id))
            })?,
            None => 1,
        };

        let table = self
            .document
            .entry(TABLE_NAME)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| Error::Store(format!("\"{}\" table is not an object", TABLE_NAME)))?;
        table.insert(next_id.to_string(), template.to_record());

        self.save()?;
        debug!(id = next_id, template = %template.name, "inserted template");
        Ok(next_id)
    }

    fn all(&self) -> Result<Vec<Value>> {
        Ok(self.entries().into_iter().map(|(_, record)| record.clone()).collect())
    }
}
