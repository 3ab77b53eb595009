//! フィールドフィルタモジュール
//!
//! ユーザ指定の範囲文字列（`"5"` や `"1000-1005"`）を整数の範囲に変換し、
//! 命名規則のフィールドごとのフィルタ集合を構築する。

use crate::error::{FrameCheckError, Result};
use crate::naming::NamingConvention;
use std::collections::HashMap;

/// 1フィールド分の許容範囲（両端を含む）
///
/// min <= max は検証しない。min > max の範囲はどの値にも一致しないだけで、
/// エラーにはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
}

impl FieldRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 範囲文字列をパースする
///
/// - 空文字列 → `None`（全許容）
/// - `"N"` → min = max = N
/// - `"N-M"` → min = N, max = M
pub fn parse_range(raw: &str) -> Result<Option<FieldRange>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = raw.split('-').collect();
    let parse_token = |token: &str| -> Result<i64> {
        token
            .parse::<i64>()
            .map_err(|_| FrameCheckError::InvalidRange(raw.to_string()))
    };

    match tokens.as_slice() {
        [single] => {
            let n = parse_token(single)?;
            Ok(Some(FieldRange { min: n, max: n }))
        }
        [lo, hi] => Ok(Some(FieldRange {
            min: parse_token(lo)?,
            max: parse_token(hi)?,
        })),
        _ => Err(FrameCheckError::InvalidRange(raw.to_string())),
    }
}

/// 命名規則のフィールドごとのフィルタ集合
///
/// エントリは命名規則と同じ順序で、フィールドごとに必ず1つ存在する。
#[derive(Debug, Clone)]
pub struct FieldFilterSet {
    entries: Vec<(String, Option<FieldRange>)>,
}

impl FieldFilterSet {
    /// 生の範囲文字列マップからフィルタ集合を構築する
    ///
    /// `raw_values` に命名規則に存在しないフィールド名があればエラー。
    /// 指定のないフィールドは全許容になる。
    pub fn build(
        convention: &NamingConvention,
        raw_values: &HashMap<String, String>,
    ) -> Result<Self> {
        for key in raw_values.keys() {
            if !convention.fields.contains(key) {
                return Err(FrameCheckError::UnknownField(key.clone()));
            }
        }

        let mut entries = Vec::with_capacity(convention.fields.len());
        for field in &convention.fields {
            let range = match raw_values.get(field) {
                Some(raw) => parse_range(raw).map_err(|_| {
                    FrameCheckError::InvalidRange(format!("{}={}", field, raw))
                })?,
                None => None,
            };
            entries.push((field.clone(), range));
        }

        Ok(Self { entries })
    }

    /// i番目のフィールドの範囲（全許容なら None）
    pub fn range_at(&self, index: usize) -> Option<&FieldRange> {
        self.entries.get(index).and_then(|(_, range)| range.as_ref())
    }

    /// i番目のフィールド名
    pub fn field_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(field, _)| field.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `--filter FIELD=RANGE` 形式の引数列をマップに変換する
pub fn parse_filter_args(args: &[String]) -> Result<HashMap<String, String>> {
    let mut raw_values = HashMap::new();
    for arg in args {
        let (field, range) = arg
            .split_once('=')
            .ok_or_else(|| FrameCheckError::InvalidFilterArg(arg.clone()))?;
        raw_values.insert(field.trim().to_string(), range.trim().to_string());
    }
    Ok(raw_values)
}
