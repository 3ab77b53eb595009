//! 破損フレーム判定モジュール
//!
//! カタログ内の各フレームに対して2つの独立したパスを実行する。
//!
//! ## 処理フロー
//! 1. ファイルサイズが閾値以下のフレームに警告を付与
//! 2. 平均明度（HSVのV成分）が閾値以下のフレームに警告を付与
//!
//! どちらのパスもデコード済みピクセルに対する純粋な判定で、I/Oは行わない。

use crate::scanner::FrameCatalog;
use image::RgbImage;

/// ファイルサイズ閾値のデフォルト（メガバイト）
pub const DEFAULT_SIZE_THRESHOLD_MB: f64 = 0.2;

/// 明度閾値のデフォルト（0.0 = 黒、1.0 = 白）
pub const DEFAULT_VALUE_THRESHOLD: f64 = 0.02;

/// 判定オプション
#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    /// ファイルサイズ閾値（MB）。これ以下で警告
    pub size_threshold_mb: f64,
    /// 明度閾値（0.0-1.0）。平均明度がこれ以下で警告
    pub value_threshold: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            size_threshold_mb: DEFAULT_SIZE_THRESHOLD_MB,
            value_threshold: DEFAULT_VALUE_THRESHOLD,
        }
    }
}

/// 両方の判定パスを実行する
///
/// サイズ判定を先に実行するため、両方に該当するフレームでは
/// サイズ警告が明度警告より前に並ぶ。
pub fn classify_defects(catalog: &mut FrameCatalog, options: &ClassifierOptions) {
    find_small_frames(catalog, options.size_threshold_mb);
    find_dark_frames(catalog, options.value_threshold);
}

/// ファイルサイズが閾値以下のフレームに警告を付与する
///
/// 比較は閾値を含む（ちょうど閾値のフレームも警告対象）。
pub fn find_small_frames(catalog: &mut FrameCatalog, size_threshold_mb: f64) {
    for frame in catalog.frames_mut() {
        if frame.size_mb <= size_threshold_mb {
            frame.warnings.push(format!(
                "Small image - Image size is {:.6} megabytes",
                frame.size_mb
            ));
        }
    }
}

/// 平均明度が閾値以下のフレームに警告を付与する
///
/// 明度はHSV表現のV成分（ピクセルごとの max(R, G, B)）の平均を
/// 255で正規化した値。比較は閾値を含む。
pub fn find_dark_frames(catalog: &mut FrameCatalog, value_threshold: f64) {
    for frame in catalog.frames_mut() {
        let avg_value = mean_value(&frame.image);
        if avg_value <= value_threshold {
            frame.warnings.push(format!(
                "Dark image - Average value of {:.2}%",
                avg_value * 100.0
            ));
        }
    }
}

/// HSVのV成分の平均値（0.0-1.0）
fn mean_value(image: &RgbImage) -> f64 {
    let pixel_count = image.width() as u64 * image.height() as u64;
    if pixel_count == 0 {
        return 0.0;
    }

    let sum: u64 = image
        .pixels()
        .map(|p| {
            let image::Rgb([r, g, b]) = *p;
            r.max(g).max(b) as u64
        })
        .sum();

    sum as f64 / pixel_count as f64 / 255.0
}
