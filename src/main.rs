use clap::Parser;
use frame_check_rust::{analyzer, cli, config, error, filter, grid, naming, report, scanner};

use analyzer::ClassifierOptions;
use cli::{Cli, Commands};
use config::Config;
use error::{FrameCheckError, Result};
use naming::NamingConvention;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            frames_dir,
            naming,
            filters,
            size_thresh,
            value_thresh,
            columns,
            thumb_width,
            output,
            grid_output,
            no_grid,
        } => {
            println!("🎞  frame-check - 破損フレーム検出\n");

            // 1. 命名規則
            println!("[1/4] 命名規則を読み込み中...");
            let convention = NamingConvention::load(&naming)?;
            println!(
                "✔ フィールド: {} / 拡張子: {}\n",
                convention.fields.join(", "),
                convention.extension
            );

            let raw_filters = filter::parse_filter_args(&filters)?;
            let filter_set = filter::FieldFilterSet::build(&convention, &raw_filters)?;

            // 2. スキャン
            println!("[2/4] フレームをスキャン中...");
            let mut catalog = scanner::scan(&frames_dir, &convention, &filter_set, cli.verbose)?;
            println!("✔ {}枚のフレームを検出\n", catalog.len());

            // 3. 破損判定
            println!("[3/4] 破損フレームを判定中...");
            let options = ClassifierOptions {
                size_threshold_mb: size_thresh.unwrap_or(config.size_threshold_mb),
                value_threshold: value_thresh.unwrap_or(config.value_threshold),
            };
            analyzer::classify_defects(&mut catalog, &options);

            let analysis = report::build(&catalog);
            println!("✔ 警告フレーム {}件\n", analysis.entries.len());

            print!("{}", analysis.render_text());

            if let Some(output_path) = output {
                analysis.save_json(&output_path)?;
                println!("✔ レポートを保存: {}", output_path.display());
            }

            // 4. サムネイルグリッド
            if !no_grid {
                println!("[4/4] サムネイルグリッドを生成中...");
                let grid_columns = columns.unwrap_or(config.grid_columns);
                let grid_thumb_width = thumb_width.unwrap_or(config.thumbnail_width);

                match grid::compose(&catalog, grid_columns, grid_thumb_width) {
                    Ok(image) => {
                        grid::save(&image, &grid_output)?;
                        println!("✔ グリッドを保存: {}", grid_output.display());
                    }
                    Err(FrameCheckError::EmptySelection) => {
                        println!("- 警告フレームがないためグリッドをスキップ");
                    }
                    Err(e) => return Err(e),
                }
            }

            println!("\n✅ 解析完了");
        }

        Commands::Config {
            show,
            set_size_thresh,
            set_value_thresh,
            set_columns,
            set_thumb_width,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(value) = set_size_thresh {
                config.size_threshold_mb = value;
                changed = true;
            }
            if let Some(value) = set_value_thresh {
                config.value_threshold = value;
                changed = true;
            }
            if let Some(value) = set_columns {
                config.grid_columns = value;
                changed = true;
            }
            if let Some(value) = set_thumb_width {
                config.thumbnail_width = value;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  サイズ閾値: {} MB", config.size_threshold_mb);
                println!("  明度閾値: {}", config.value_threshold);
                println!("  グリッド列数: {}", config.grid_columns);
                println!("  サムネイル幅: {}px", config.thumbnail_width);
            }
        }
    }

    Ok(())
}
