//! フォーム照合の型定義
//!
//! CLIとストアで共有される型:
//! - FieldType: 値の意味的な型ラベル
//! - FieldMap: 挿入順を保持するフィールド名マップ
//! - Template: 名前付きのフィールド署名

use crate::error::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// レコード内でテンプレート名に予約されたキー
pub const NAME_KEY: &str = "name";

/// フィールドの型ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Date,
    Phone,
    Email,
    /// どのルールにも一致しない値
    #[default]
    Text,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::Date,
        FieldType::Phone,
        FieldType::Email,
        FieldType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Date => "date",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
            FieldType::Text => "text",
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownFieldType(s.to_string()))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 挿入順を保持するフィールド名 → 値のマップ
///
/// キーは一意。既存キーへの再挿入は位置を保ったまま値を置き換える。
/// フォームのフィールド数は小さい前提で、線形探索で引く。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<V> {
    entries: Vec<(String, V)>,
}

/// 入力値のフィールドセット
pub type FieldSet = FieldMap<String>;

/// 判定結果の型マップ
pub type TypeMap = FieldMap<FieldType>;

impl<V> FieldMap<V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// 値を挿入し、置き換えた旧値を返す
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<V> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> IntoIterator for FieldMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for FieldMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for FieldMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FieldMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for FieldMapVisitor<V> {
            type Value = FieldMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = FieldMap::new();
                while let Some((name, value)) = access.next_entry::<String, V>()? {
                    map.insert(name, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor(PhantomData))
    }
}

/// フォームテンプレート
///
/// `name` は表示用で、照合対象のフィールドには含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    /// フィールド名 → 期待する型ラベル
    #[serde(default)]
    pub fields: FieldSet,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldSet::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.fields.insert(name, label.into());
        self
    }

    /// 保存形式（フラットなオブジェクト）から読み込む
    ///
    /// `name` キー以外はすべてフィールドとして扱う。
    pub fn from_record(record: &Value) -> Result<Self> {
        let obj = record
            .as_object()
            .ok_or_else(|| Error::InvalidRecord("record is not an object".into()))?;

        let name = obj
            .get(NAME_KEY)
            .ok_or_else(|| Error::InvalidRecord("missing \"name\"".into()))?
            .as_str()
            .ok_or_else(|| Error::InvalidRecord("\"name\" is not a string".into()))?;

        let mut template = Template::new(name);
        for (field, label) in obj.iter().filter(|(k, _)| k.as_str() != NAME_KEY) {
            let label = label.as_str().ok_or_else(|| {
                Error::InvalidRecord(format!("field \"{}\" of \"{}\" is not a string", field, name))
            })?;
            template.fields.insert(field.as_str(), label.to_string());
        }

        Ok(template)
    }

    /// 保存形式に変換（`name` を先頭に置く）
    ///
    /// 予約キーと同名のフィールドは保存形式で表現できないため落とす。
    pub fn to_record(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(NAME_KEY.to_string(), Value::String(self.name.clone()));
        for (field, label) in self.fields.iter().filter(|(f, _)| *f != NAME_KEY) {
            obj.insert(field.to_string(), Value::String(label.clone()));
        }
        Value::Object(obj)
    }
}
