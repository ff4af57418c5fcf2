use anyhow::Context;
use clap::Parser;
use photo_rank::{cli, config, error, export, logging, picker, report, session};
use cli::{Cli, Commands, RankingArgs};
use config::Config;
use photo_rank_common::{build_view, Shortlist, ShortlistDelivery};
use session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Rank { ranking, top, explain, json } => {
            let session = Session::resolve(&ranking, &config)?;
            let ranked = session.rank();
            let page_size = top.unwrap_or(config.top_n);
            let view = build_view(&ranked, &session.filters, &Shortlist::new(), page_size);

            if json {
                println!("{}", serde_json::to_string_pretty(&view.page)?);
                return Ok(());
            }

            println!("📸 photo-rank - ランキング\n");
            println!("重み: {}", report::format_weights(&session.normalized));
            if !session.profile.is_empty() {
                println!("プロファイル: {}", serde_json::to_string(&session.profile)?);
            }
            report::print_view(&view, explain);
        }

        Commands::Shortlist { ranking, select, interactive, format, output, title } => {
            println!("⭐ photo-rank - ショートリスト\n");

            let session = Session::resolve(&ranking, &config)?;
            let ranked = session.rank();

            let mut shortlist = session.shortlist_from_ids(&select)?;
            if interactive {
                // 絞り込み後の候補から選ぶ
                let candidates = build_view(&ranked, &session.filters, &shortlist, usize::MAX);
                shortlist = picker::select_interactive(&candidates.page, &shortlist)?;
            }
            if shortlist.is_empty() {
                return Err(error::PhotoRankError::EmptyShortlist.into());
            }

            let view = build_view(&ranked, &session.filters, &shortlist, config.top_n);
            println!("{}", report::format_summary(&view.summary));
            for (i, entry) in view.shortlist.iter().enumerate() {
                println!("{}", report::format_entry(i + 1, entry, true));
            }
            println!();

            let generated_at = chrono::Local::now().to_rfc3339();
            let delivery = ShortlistDelivery::new(
                &title,
                &generated_at,
                session.weights,
                &session.profile,
                &view.shortlist,
            );

            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            export::export_delivery(&delivery, &format, &output_dir)
                .with_context(|| format!("納品ファイルの出力に失敗しました: {}", output_dir.display()))?;

            println!("\n✅ ショートリスト出力完了");
        }

        Commands::Catalog { catalog } => {
            let args = RankingArgs {
                catalog,
                ..Default::default()
            };
            let session = Session::resolve(&args, &config)?;
            println!("🗂 photo-rank - カタログ\n");
            report::print_catalog_overview(&session.photos);
        }

        Commands::Config { set_weights, set_top, set_catalog, set_profile, reset, show } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset
                || set_weights.is_some()
                || set_top.is_some()
                || set_catalog.is_some()
                || set_profile.is_some();

            if let Some(weights) = set_weights {
                config.set_weights(weights)?;
                println!("✔ 重みを設定しました: {}", weights);
            }
            if let Some(top) = set_top {
                config.set_top_n(top)?;
                println!("✔ 表示件数を設定しました: {}", top);
            }
            if let Some(path) = set_catalog {
                config.catalog = Some(path);
                println!("✔ カタログを設定しました");
            }
            if let Some(path) = set_profile {
                config.profile = Some(path);
                println!("✔ プロファイルを設定しました");
            }
            if changed {
                config.save()?;
                if reset {
                    println!("✔ 設定を初期化しました");
                }
            }

            if show || !changed {
                let normalized = config.weights.normalize()?;
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  重み: {} ({})", config.weights, report::format_weights(&normalized));
                println!("  表示件数: {}", config.top_n);
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "サンプル".into())
                );
                println!(
                    "  プロファイル: {}",
                    config
                        .profile_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}
