//! フレームスキャンモジュール
//!
//! ディレクトリを走査して命名規則に一致するフレームを集め、
//! 画像をデコードしてカタログを構築する。
//!
//! ## 処理フロー
//! 1. 通常ファイル以外をスキップ
//! 2. 拡張子の一致チェック（大文字小文字を区別）
//! 3. ファイル名をフィールドに分解して整数パース
//! 4. フィールドごとの範囲フィルタを適用
//! 5. 生き残ったファイルを並列デコードしてカタログ化

use crate::error::{FrameCheckError, Result};
use crate::filter::FieldFilterSet;
use crate::naming::NamingConvention;
use image::RgbImage;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BYTES_IN_MEGABYTE: f64 = 1_048_576.0;

/// カタログ化された1フレーム
///
/// 生成後に変更されるのは warnings のみ。
#[derive(Debug, Clone)]
pub struct FrameRecord {
    /// ファイル名（拡張子込み）
    pub file_name: String,
    /// デコード済みのRGB画像
    pub image: RgbImage,
    /// ファイルサイズ（メガバイト）
    pub size_mb: f64,
    /// 破損判定で付与される警告
    pub warnings: Vec<String>,
}

impl FrameRecord {
    pub fn new(file_name: String, image: RgbImage, size_mb: f64) -> Self {
        Self {
            file_name,
            image,
            size_mb,
            warnings: Vec::new(),
        }
    }
}

/// スキャン結果のフレームカタログ
///
/// 格納順は常にファイル名の辞書順。ディレクトリの走査順は
/// プラットフォーム依存のため、コンストラクタでソートして
/// レポートとグリッドの出力順を決定的にする。
#[derive(Debug, Clone, Default)]
pub struct FrameCatalog {
    frames: Vec<FrameRecord>,
}

impl FrameCatalog {
    pub fn new(mut frames: Vec<FrameRecord>) -> Self {
        frames.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { frames }
    }

    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [FrameRecord] {
        &mut self.frames
    }

    /// 警告が1件以上あるフレーム（格納順）
    pub fn flagged(&self) -> impl Iterator<Item = &FrameRecord> {
        self.frames.iter().filter(|f| !f.warnings.is_empty())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// デコード前の候補ファイル
struct Candidate {
    path: PathBuf,
    file_name: String,
    size_mb: f64,
}

/// ディレクトリを走査してフレームカタログを構築する
///
/// 個々の不正ファイルではスキャンを中断しない。スキップ理由は
/// stderr に出力し、カタログには含めない。
pub fn scan(
    folder: &Path,
    convention: &NamingConvention,
    filters: &FieldFilterSet,
    verbose: bool,
) -> Result<FrameCatalog> {
    if !folder.exists() {
        return Err(FrameCheckError::FolderNotFound(
            folder.display().to_string(),
        ));
    }

    let suffix = format!(".{}", convention.extension);
    let mut candidates = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        // 拡張子は大文字小文字込みの完全一致
        let stem = match file_name.strip_suffix(&suffix) {
            Some(stem) => stem,
            None => continue,
        };

        let tokens: Vec<&str> = stem.split('_').collect();
        if tokens.len() != convention.field_count() {
            eprintln!(
                "不正なファイル名をスキップ: 単語数が一致しません: {}",
                file_name
            );
            continue;
        }

        let mut values = Vec::with_capacity(tokens.len());
        let mut parse_failed = false;
        for token in &tokens {
            match token.parse::<i64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    eprintln!(
                        "不正なファイル名をスキップ: 整数でない値 {} ({})",
                        token, file_name
                    );
                    parse_failed = true;
                    break;
                }
            }
        }
        if parse_failed {
            continue;
        }

        // 範囲外のフィールドが1つでもあればカタログから除外する
        let mut out_of_range = false;
        for (i, value) in values.iter().enumerate() {
            if let Some(range) = filters.range_at(i) {
                if !range.contains(*value) {
                    if verbose {
                        eprintln!(
                            "範囲外のためスキップ: {} ({}={})",
                            file_name,
                            filters.field_at(i).unwrap_or("?"),
                            value
                        );
                    }
                    out_of_range = true;
                    break;
                }
            }
        }
        if out_of_range {
            continue;
        }

        let size_mb = match std::fs::metadata(path) {
            Ok(meta) => meta.len() as f64 / BYTES_IN_MEGABYTE,
            Err(e) => {
                eprintln!("ファイル情報の取得に失敗: {} ({})", file_name, e);
                continue;
            }
        };

        candidates.push(Candidate {
            path: path.to_path_buf(),
            file_name,
            size_mb,
        });
    }

    // デコードは並列。出力順はカタログのソートで決まるため走査順に依存しない

    let progress = ProgressBar::new(candidates.len() as u64);
    let frames: Vec<FrameRecord> = candidates
        .into_par_iter()
        .filter_map(|candidate| {
            let decoded = image::open(&candidate.path);
            progress.inc(1);
            match decoded {
                Ok(img) => Some(FrameRecord::new(
                    candidate.file_name,
                    img.to_rgb8(),
                    candidate.size_mb,
                )),
                Err(e) => {
                    eprintln!("画像の読み込みに失敗: {} ({})", candidate.file_name, e);
                    None
                }
            }
        })
        .collect();
    progress.finish_and_clear();

    Ok(FrameCatalog::new(frames))
}
