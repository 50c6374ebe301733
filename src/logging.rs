use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログ出力を初期化（標準エラーへ出力）
///
/// `RUST_LOG` が設定されていればそちらを優先する。
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "form_matcher=debug,form_matcher_common=debug"
    } else {
        "form_matcher=warn,form_matcher_common=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
