//! サブコマンドの処理
//!
//! 各関数は表示用の文字列を返し、出力は呼び出し側が行う。

use crate::error::{FormMatcherError, Result};
use form_matcher_common::types::NAME_KEY;
use form_matcher_common::{classify_all, find_in_store, FieldSet, FieldType, Template, TemplateStore};
use tracing::info;

/// 一致したテンプレート名、または各フィールドの型（JSON）を返す
///
/// 照合には入力値をそのまま使い、型判定は一致しなかった場合の表示にだけ使う。
pub fn get_template<S: TemplateStore + ?Sized>(store: &S, fields: &FieldSet) -> Result<String> {
    if let Some(template) = find_in_store(fields, store)? {
        info!(template = %template.name, "matched template");
        return Ok(template.name);
    }

    let types = classify_all(fields);
    Ok(serde_json::to_string_pretty(&types)?)
}

/// テンプレートを追加し、ドキュメントIDを返す
pub fn add_template<S: TemplateStore + ?Sized>(
    store: &mut S,
    name: &str,
    fields: &FieldSet,
) -> Result<u64> {
    let mut template = Template::new(name);

    for (field, label) in fields.iter() {
        if field == NAME_KEY {
            return Err(FormMatcherError::InvalidFieldArg(format!(
                "--{}={}（\"{}\" はテンプレート名用に予約されています）",
                field, label, NAME_KEY
            )));
        }
        let field_type: FieldType = label.parse()?;
        template.fields.insert(field, field_type.to_string());
    }

    let id = store.insert(&template)?;
    info!(id, template = %name, "added template");
    Ok(id)
}

/// 登録済みテンプレートを1行ずつ整形
pub fn list_templates<S: TemplateStore + ?Sized>(store: &S) -> Result<String> {
    let lines: Vec<String> = store
        .templates()?
        .iter()
        .map(|t| {
            let fields: Vec<String> = t
                .fields
                .iter()
                .map(|(field, label)| format!("{}={}", field, label))
                .collect();
            format!("{}: {}", t.name, fields.join(", "))
        })
        .collect();

    Ok(lines.join("\n"))
}
