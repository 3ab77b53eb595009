//! レポートモジュール
//!
//! 警告付きフレームだけを集めた構造化レポートを組み立て、
//! コンソール向けテキストとJSONの両方に書き出す。

use crate::error::Result;
use crate::scanner::FrameCatalog;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 警告付きフレーム1件分のエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub file_name: String,
    /// 警告（付与された順）
    pub warnings: Vec<String>,
}

/// 解析レポート
///
/// エントリはカタログと同じ順序（ファイル名の辞書順）。
/// 警告のないフレームは含まれない。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 生成時刻（RFC3339）
    pub generated_at: String,
    /// スキャンしたフレーム総数
    pub total_frames: usize,
    pub entries: Vec<ReportEntry>,
}

/// カタログからレポートを組み立てる
pub fn build(catalog: &FrameCatalog) -> AnalysisReport {
    let entries = catalog
        .flagged()
        .map(|frame| ReportEntry {
            file_name: frame.file_name.clone(),
            warnings: frame.warnings.clone(),
        })
        .collect();

    AnalysisReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total_frames: catalog.len(),
        entries,
    }
}

impl AnalysisReport {
    /// コンソール向けテキスト表現
    ///
    /// ファイル名の行に続けて、警告をタブ字下げで1行ずつ並べる。
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.file_name);
            out.push('\n');
            for warning in &entry.warnings {
                out.push('\t');
                out.push_str(warning);
                out.push('\n');
            }
        }
        out
    }

    /// レポートをJSONとして保存する
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{FrameCatalog, FrameRecord};
    use image::RgbImage;

    fn catalog_with_warnings() -> FrameCatalog {
        let mut catalog = FrameCatalog::new(vec![
            FrameRecord::new("001_010_1000.jpg".to_string(), RgbImage::new(2, 2), 0.004),
            FrameRecord::new("001_010_1001.jpg".to_string(), RgbImage::new(2, 2), 2.0),
            FrameRecord::new("001_010_1002.jpg".to_string(), RgbImage::new(2, 2), 0.1),
        ]);
        catalog.frames_mut()[0].warnings.push("Small image - Image size is 0.004000 megabytes".to_string());
        catalog.frames_mut()[0].warnings.push("Dark image - Average value of 0.00%".to_string());
        catalog.frames_mut()[2].warnings.push("Small image - Image size is 0.100000 megabytes".to_string());
        catalog
    }

    #[test]
    fn test_build_omits_clean_frames() {
        let report = build(&catalog_with_warnings());
        assert_eq!(report.total_frames, 3);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].file_name, "001_010_1000.jpg");
        assert_eq!(report.entries[1].file_name, "001_010_1002.jpg");
    }

    #[test]
    fn test_build_preserves_warning_order() {
        let report = build(&catalog_with_warnings());
        let warnings = &report.entries[0].warnings;
        assert!(warnings[0].starts_with("Small image"));
        assert!(warnings[1].starts_with("Dark image"));
    }

    #[test]
    fn test_build_empty_catalog() {
        let report = build(&FrameCatalog::default());
        assert_eq!(report.total_frames, 0);
        assert!(report.entries.is_empty());
        assert!(report.render_text().is_empty());
    }

    #[test]
    fn test_render_text_format() {
        let report = build(&catalog_with_warnings());
        let text = report.render_text();
        let expected = "001_010_1000.jpg\n\
                        \tSmall image - Image size is 0.004000 megabytes\n\
                        \tDark image - Average value of 0.00%\n\
                        001_010_1002.jpg\n\
                        \tSmall image - Image size is 0.100000 megabytes\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_round_trip() {
        let report = build(&catalog_with_warnings());
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_frames, report.total_frames);
        assert_eq!(parsed.entries.len(), report.entries.len());
        assert_eq!(parsed.entries[0].warnings, report.entries[0].warnings);
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"generatedAt\""));
    }
}
