//! Form Matcher Common Library
//!
//! フォームテンプレート照合とフィールド型判定の中核（I/Oなし）

pub mod types;
pub mod classifier;
pub mod matcher;
pub mod store;
pub mod error;

pub use types::{FieldMap, FieldSet, FieldType, Template, TypeMap};
pub use classifier::{classify, classify_all};
pub use matcher::{find_in_store, find_matching_template, template_matches};
pub use store::{MemoryStore, TemplateStore};
pub use error::{Error, Result};
