//! サムネイルグリッドモジュール
//!
//! 警告付きフレームの縮小サムネイルを固定列数で並べた
//! 1枚の確認用画像を合成する。

use crate::error::{FrameCheckError, Result};
use crate::scanner::FrameCatalog;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use std::path::Path;

/// グリッド列数のデフォルト
pub const DEFAULT_GRID_COLUMNS: u32 = 4;

/// サムネイル幅のデフォルト（ピクセル）
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 100;

/// 警告付きフレームのサムネイルグリッドを合成する
///
/// サムネイルの高さは最初の警告フレームのアスペクト比から求め、
/// 全サムネイルに同じ高さを適用する。アスペクト比の異なるフレームは
/// 変形して収まる。タイルサイズは出力全体で固定。
/// 最終行は白タイルで列数ちょうどまで埋める。
///
/// 警告フレームが1件もない場合は `EmptySelection` を返す。
pub fn compose(catalog: &FrameCatalog, columns: u32, thumb_width: u32) -> Result<RgbImage> {
    let flagged: Vec<&RgbImage> = catalog.flagged().map(|f| &f.image).collect();
    if flagged.is_empty() {
        return Err(FrameCheckError::EmptySelection);
    }

    let first = flagged[0];
    let thumb_height =
        ((thumb_width as f64 * first.height() as f64 / first.width() as f64) as u32).max(1);

    // 線形補間で縮小
    let mut thumbs: Vec<RgbImage> = flagged
        .iter()
        .map(|im| image::imageops::resize(*im, thumb_width, thumb_height, FilterType::Triangle))
        .collect();

    // 最終行を列数ちょうどまで白タイルで埋める
    let filler_count = (columns - thumbs.len() as u32 % columns) % columns;
    for _ in 0..filler_count {
        thumbs.push(RgbImage::from_pixel(
            thumb_width,
            thumb_height,
            Rgb([255, 255, 255]),
        ));
    }

    let rows = thumbs.len() as u32 / columns;
    let mut grid = RgbImage::new(columns * thumb_width, rows * thumb_height);
    for (i, thumb) in thumbs.iter().enumerate() {
        let x = (i as u32 % columns) * thumb_width;
        let y = (i as u32 / columns) * thumb_height;
        image::imageops::replace(&mut grid, thumb, x as i64, y as i64);
    }

    Ok(grid)
}

/// グリッド画像をファイルに保存する
pub fn save(grid: &RgbImage, path: &Path) -> Result<()> {
    grid.save(path)
        .map_err(|e| FrameCheckError::ImageSave(format!("{}: {}", path.display(), e)))
}
