use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("命名規則が不正です: {0}")]
    MalformedConvention(String),

    #[error("範囲指定が不正です: {0}")]
    InvalidRange(String),

    #[error("フィルタ指定が不正です（FIELD=RANGE 形式で指定してください）: {0}")]
    InvalidFilterArg(String),

    #[error("命名規則に存在しないフィールドです: {0}")]
    UnknownField(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("警告フレームが1件もないためグリッドを生成できません")]
    EmptySelection,

    #[error("画像保存エラー: {0}")]
    ImageSave(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_malformed_convention() {
        let error = FrameCheckError::MalformedConvention("拡張子がありません".to_string());
        let display = format!("{}", error);
        assert!(display.contains("命名規則が不正"));
        assert!(display.contains("拡張子がありません"));
    }

    #[test]
    fn test_error_display_invalid_range() {
        let error = FrameCheckError::InvalidRange("frame=1-2-3".to_string());
        let display = format!("{}", error);
        assert!(display.contains("範囲指定が不正"));
        assert!(display.contains("1-2-3"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: FrameCheckError = io_error.into();
        assert!(matches!(error, FrameCheckError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FrameCheckError = json_error.into();
        assert!(matches!(error, FrameCheckError::JsonParse(_)));
    }
}
