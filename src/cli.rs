use clap::{Args, Parser, Subcommand};
use photo_rank_common::{Mood, ScoringWeights, ShotType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-rank")]
#[command(about = "写真ランキング・ショートリスト作成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログをスコア順に表示
    Rank {
        #[command(flatten)]
        ranking: RankingArgs,

        /// 表示件数（デフォルト: 設定値）
        #[arg(short = 'n', long, value_parser = parse_top_n)]
        top: Option<usize>,

        /// スコアの内訳を表示
        #[arg(long)]
        explain: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ショートリストを作成して納品ファイルを出力
    Shortlist {
        #[command(flatten)]
        ranking: RankingArgs,

        /// 選択する写真ID（複数指定可）
        #[arg(short, long = "select", value_name = "ID")]
        select: Vec<String>,

        /// 対話的に選択
        #[arg(short, long)]
        interactive: bool,

        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 納品タイトル
        #[arg(short, long, default_value = "shortlist")]
        title: String,
    },

    /// カタログの内訳を表示
    Catalog {
        /// カタログJSON（省略時はサンプル）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の重みを設定 (technical,storytelling,alignment)
        #[arg(long, value_name = "T,S,A")]
        set_weights: Option<ScoringWeights>,

        /// 既定の表示件数を設定
        #[arg(long, value_parser = parse_top_n)]
        set_top: Option<usize>,

        /// 既定のカタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定のプロファイルJSONを設定
        #[arg(long)]
        set_profile: Option<PathBuf>,

        /// 設定を初期化
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// ランキング入力（rank/shortlist共通）
#[derive(Args, Clone, Debug, Default)]
pub struct RankingArgs {
    /// カタログJSON（省略時は設定値、なければサンプル）
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// 重み (technical,storytelling,alignment)
    #[arg(short, long, value_name = "T,S,A")]
    pub weights: Option<ScoringWeights>,

    /// クライアントプロファイルJSON
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// サンプルプロファイルを使用
    #[arg(long, conflicts_with = "profile")]
    pub sample_profile: bool,

    /// 好みのムード（プロファイルに追加）
    #[arg(long = "mood", value_name = "MOOD")]
    pub moods: Vec<Mood>,

    /// 必須ショット種別（プロファイルに追加）
    #[arg(long = "shot", value_name = "SHOT")]
    pub shots: Vec<ShotType>,

    /// ハイライトタグ（プロファイルに追加）
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// 最低人数
    #[arg(long)]
    pub min_faces: Option<u32>,

    /// ショット種別で絞り込み
    #[arg(long = "filter-shot", value_name = "SHOT")]
    pub filter_shots: Vec<ShotType>,

    /// ムードで絞り込み
    #[arg(long = "filter-mood", value_name = "MOOD")]
    pub filter_moods: Vec<Mood>,

    /// 撮影場所で絞り込み
    #[arg(long = "filter-location", value_name = "LOCATION")]
    pub filter_locations: Vec<String>,

    /// タイトル・場所・タグ・メモを検索
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportFormat {
    Excel,
    Json,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

/// 表示件数（1以上）
fn parse_top_n(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("表示件数は1以上にしてください".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_rank_args() {
        let cli = Cli::try_parse_from([
            "photo-rank",
            "rank",
            "--weights",
            "30,30,40",
            "--mood",
            "joyful",
            "--mood",
            "romantic",
            "--shot",
            "portrait",
            "--min-faces",
            "2",
            "--filter-location",
            "Chapel",
            "-n",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { ranking, top, .. } => {
                assert_eq!(ranking.weights, Some(ScoringWeights::new(30.0, 30.0, 40.0)));
                assert_eq!(ranking.moods, vec![Mood::Joyful, Mood::Romantic]);
                assert_eq!(ranking.shots, vec![ShotType::Portrait]);
                assert_eq!(ranking.min_faces, Some(2));
                assert_eq!(ranking.filter_locations, vec!["Chapel".to_string()]);
                assert_eq!(top, Some(3));
            }
            _ => panic!("rank expected"),
        }
    }

    #[test]
    fn test_parse_shortlist_select() {
        let cli = Cli::try_parse_from([
            "photo-rank",
            "shortlist",
            "-s",
            "ph-001",
            "-s",
            "ph-003",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Shortlist { select, format, .. } => {
                assert_eq!(select, vec!["ph-001", "ph-003"]);
                assert_eq!(format, ExportFormat::Json);
            }
            _ => panic!("shortlist expected"),
        }
    }

    #[test]
    fn test_profile_conflicts_with_sample_profile() {
        let result = Cli::try_parse_from([
            "photo-rank",
            "rank",
            "--profile",
            "p.json",
            "--sample-profile",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_top_must_be_positive() {
        assert!(Cli::try_parse_from(["photo-rank", "rank", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["photo-rank", "config", "--set-top", "0"]).is_err());
        assert!(Cli::try_parse_from(["photo-rank", "rank", "-n", "5"]).is_ok());
    }
}
