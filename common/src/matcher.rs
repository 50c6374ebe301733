//! テンプレート照合
//!
//! 候補フィールドの値とテンプレートの型ラベルを文字列として直接比較する。
//! 分類器による正規化は行わない（呼び出し側がラベルを渡す前提）。

use crate::error::Result;
use crate::store::TemplateStore;
use crate::types::{FieldSet, Template, NAME_KEY};
use serde_json::Value;
use tracing::{debug, warn};

/// テンプレートの全フィールドが候補に同じ値で含まれるか
///
/// 候補側の余分なキーは無視する。フィールドのないテンプレートは常に一致。
pub fn template_matches(template: &Template, fields: &FieldSet) -> bool {
    template
        .fields
        .iter()
        .filter(|(name, _)| *name != NAME_KEY)
        .all(|(name, label)| fields.get(name) == Some(label))
}

/// 保存順に走査し、最初に一致したテンプレートを返す
///
/// 壊れたレコードは警告を出して読み飛ばす。
pub fn find_matching_template(fields: &FieldSet, records: &[Value]) -> Option<Template> {
    for (index, record) in records.iter().enumerate() {
        let template = match Template::from_record(record) {
            Ok(t) => t,
            Err(e) => {
                warn!(index, error = %e, "skipping malformed template record");
                continue;
            }
        };

        if template_matches(&template, fields) {
            debug!(index, template = %template.name, "template matched");
            return Some(template);
        }
    }

    None
}

/// ストアのスナップショットに対して照合する
pub fn find_in_store<S: TemplateStore + ?Sized>(
    fields: &FieldSet,
    store: &S,
) -> Result<Option<Template>> {
    let records = store.all()?;
    debug!(templates = records.len(), fields = fields.len(), "scanning templates");
    Ok(find_matching_template(fields, &records))
}
