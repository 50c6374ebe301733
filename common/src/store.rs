//! テンプレートストア
//!
//! 照合に必要なのは挿入順の安定した列挙だけなので、
//! 保存方式はトレイトの実装側に任せる。

use crate::error::Result;
use crate::types::Template;
use serde_json::Value;
use tracing::warn;

/// 追記専用のテンプレートストア
pub trait TemplateStore {
    /// テンプレートを追加し、割り当てたドキュメントIDを返す
    fn insert(&mut self, template: &Template) -> Result<u64>;

    /// 全レコードを挿入順で返す
    fn all(&self) -> Result<Vec<Value>>;

    /// 正しい形式のテンプレートだけを返す
    fn templates(&self) -> Result<Vec<Template>> {
        let templates = self
            .all()?
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match Template::from_record(record) {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed template record");
                    None
                }
            })
            .collect();
        Ok(templates)
    }
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 任意のレコード列から作る（壊れたレコードも受け入れる）
    pub fn from_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TemplateStore for MemoryStore {
    fn insert(&mut self, template: &Template) -> Result<u64> {
        self.records.push(template.to_record());
        Ok(self.records.len() as u64)
    }

    fn all(&self) -> Result<Vec<Value>> {
        Ok(self.records.clone())
    }
}
