//! 命名規則モジュール
//!
//! フレームのファイル名テンプレート（例: `scene_shot_frame.jpg`）を
//! 1行のテキストから読み込み、フィールド名の並びと拡張子に分解する。

use crate::error::{FrameCheckError, Result};
use std::path::Path;

/// フレームファイル名の命名規則
///
/// パース後は不変。1回の実行につき1つだけ生成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    /// フィールド名（出現順、重複なし）
    pub fields: Vec<String>,
    /// 拡張子（先頭のドットなし）
    pub extension: String,
}

impl NamingConvention {
    /// テンプレート行をパースする
    ///
    /// 最初の `.` でフィールド部と拡張子に分け、フィールド部を `_` で分割する。
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();

        let (template, extension) = line.split_once('.').ok_or_else(|| {
            FrameCheckError::MalformedConvention(format!("拡張子がありません: {}", line))
        })?;

        if extension.is_empty() {
            return Err(FrameCheckError::MalformedConvention(format!(
                "拡張子が空です: {}",
                line
            )));
        }

        let fields: Vec<String> = template.split('_').map(str::to_string).collect();

        if fields.iter().any(|f| f.is_empty()) {
            return Err(FrameCheckError::MalformedConvention(format!(
                "空のフィールド名があります: {}",
                line
            )));
        }

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(FrameCheckError::MalformedConvention(format!(
                    "フィールド名が重複しています: {}",
                    field
                )));
            }
        }

        Ok(Self {
            fields,
            extension: extension.to_string(),
        })
    }

    /// 命名規則ファイル（1行目のみ使用）を読み込んでパースする
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FrameCheckError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let line = content.lines().next().ok_or_else(|| {
            FrameCheckError::MalformedConvention(format!(
                "命名規則ファイルが空です: {}",
                path.display()
            ))
        })?;

        Self::parse(line)
    }

    /// フィールド数
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
