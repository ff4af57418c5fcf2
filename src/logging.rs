use tracing_subscriber::EnvFilter;

/// tracing subscriberを初期化（stderr出力）
///
/// `RUST_LOG` があればそれに従う。なければ `--verbose` でdebug、通常はwarn。
/// 標準出力は `--json` の結果用に空けておく。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
