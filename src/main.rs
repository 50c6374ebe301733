use clap::Parser;
use form_matcher::{cli, commands, config, db, error, logging};
use cli::{Cli, Commands};
use config::Config;
use db::JsonFileStore;
use error::Result;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // 設定ファイルは --db も環境変数も無いときだけ読む
    let db_path = || -> Result<PathBuf> {
        match config::db_path_override(cli.db.as_deref()) {
            Some(path) => Ok(path),
            None => Ok(Config::load()?.db_path),
        }
    };

    match &cli.command {
        Commands::GetTpl { fields, .. } => {
            let fields = cli::parse_field_args(fields)?;
            let store = JsonFileStore::open(&db_path()?)?;
            println!("{}", commands::get_template(&store, &fields)?);
        }

        Commands::AddTpl { name, fields, .. } => {
            let fields = cli::parse_field_args(fields)?;
            let mut store = JsonFileStore::open(&db_path()?)?;
            let id = commands::add_template(&mut store, name, &fields)?;
            println!("✔ テンプレート「{}」を追加しました (id: {})", name, id);
        }

        Commands::List => {
            let store = JsonFileStore::open(&db_path()?)?;
            let listing = commands::list_templates(&store)?;
            if listing.is_empty() {
                println!("テンプレートが登録されていません: {}", store.path().display());
            } else {
                println!("{}", listing);
            }
        }

        Commands::Config { set_db, show } => {
            let mut config = Config::load()?;

            if let Some(path) = set_db {
                config.set_db_path(path.clone())?;
                println!("✔ テンプレートファイルを設定しました");
            }

            if *show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  テンプレートファイル: {}", config.db_path.display());
                println!("  使用中: {}", config.resolve_db_path(cli.db.as_deref()).display());
            }
        }
    }

    Ok(())
}
