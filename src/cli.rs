use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frame-check")]
#[command(about = "レンダリングフレームの破損検出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フレームディレクトリを解析して警告レポートを出力
    Check {
        /// フレームディレクトリのパス
        #[arg(required = true)]
        frames_dir: PathBuf,

        /// 命名規則ファイル（1行目: field1_field2_field3.ext）
        #[arg(short, long, default_value = "./naming.txt")]
        naming: PathBuf,

        /// フィールドフィルタ（例: --filter scene=001 --filter frame=1000-1005）
        #[arg(short, long = "filter", value_name = "FIELD=RANGE")]
        filters: Vec<String>,

        /// ファイルサイズ閾値（MB）。これ以下で警告（デフォルト: 設定値 0.2）
        #[arg(long)]
        size_thresh: Option<f64>,

        /// 明度閾値（0.0-1.0）。平均明度がこれ以下で警告（デフォルト: 設定値 0.02）
        #[arg(long)]
        value_thresh: Option<f64>,

        /// サムネイルグリッドの列数（デフォルト: 設定値 4）
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        columns: Option<u32>,

        /// サムネイルの幅（ピクセル、デフォルト: 設定値 100）
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        thumb_width: Option<u32>,

        /// レポートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サムネイルグリッド画像の出力先
        #[arg(long, default_value = "./warningImageThumbnails.jpg")]
        grid_output: PathBuf,

        /// サムネイルグリッドを生成しない
        #[arg(long)]
        no_grid: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// ファイルサイズ閾値（MB）を設定
        #[arg(long)]
        set_size_thresh: Option<f64>,

        /// 明度閾値（0.0-1.0）を設定
        #[arg(long)]
        set_value_thresh: Option<f64>,

        /// グリッド列数を設定
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        set_columns: Option<u32>,

        /// サムネイル幅（ピクセル）を設定
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        set_thumb_width: Option<u32>,
    },
}
