use crate::error::{FormMatcherError, Result};
use clap::{ArgAction, Parser, Subcommand};
use form_matcher_common::FieldSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "form-matcher")]
#[command(about = "フォームテンプレート照合・フィールド型判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（サブコマンドより前に指定）
    #[arg(short, long)]
    pub verbose: bool,

    /// テンプレートファイル（サブコマンドより前に指定、省略時は設定ファイルの値）
    #[arg(long)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フィールドに一致するテンプレート名を表示（無ければ各フィールドの型）
    ///
    /// `--help=値` もフィールドとして受け付けるため、ヘルプは `-h` のみ。
    #[command(name = "get-tpl", alias = "get_tpl", disable_help_flag = true)]
    GetTpl {
        /// ヘルプを表示
        #[arg(short = 'h', action = ArgAction::Help)]
        help: Option<bool>,

        /// --フィールド名=値
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "--FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// テンプレートを追加
    #[command(name = "add-tpl", alias = "add_tpl", disable_help_flag = true)]
    AddTpl {
        /// ヘルプを表示
        #[arg(short = 'h', action = ArgAction::Help)]
        help: Option<bool>,

        /// テンプレート名
        #[arg(long, required = true)]
        name: String,

        /// --フィールド名=型 (date/phone/email/text)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "--FIELD=TYPE")]
        fields: Vec<String>,
    },

    /// 登録済みテンプレートを一覧表示
    List,

    /// 設定を表示/編集
    Config {
        /// テンプレートファイルのパスを設定
        #[arg(long)]
        set_db: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--名前=値` 形式の引数列をフィールドセットに変換
///
/// 値は最初の `=` 以降すべて（空文字や `=` を含んでもよい）。
/// 同じ名前が複数回現れた場合は後の値で上書きする。
pub fn parse_field_args(args: &[String]) -> Result<FieldSet> {
    let mut fields = FieldSet::new();

    for arg in args {
        let (name, value) = arg
            .strip_prefix("--")
            .and_then(|rest| rest.split_once('='))
            .ok_or_else(|| FormMatcherError::InvalidFieldArg(arg.clone()))?;

        if name.is_empty() {
            return Err(FormMatcherError::InvalidFieldArg(arg.clone()));
        }

        fields.insert(name, value.to_string());
    }

    Ok(fields)
}
