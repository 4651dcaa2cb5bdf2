//! 設定 - 環境変数から読み込む

use std::path::PathBuf;

/// データファイルの保存先を指定する環境変数
pub const DATA_FILE_ENV: &str = "AWARD_CALENDAR_FILE";

/// 既定のデータファイル名（カレントディレクトリ）
pub const DEFAULT_DATA_FILE: &str = "awards.csv";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 賞一覧CSVのパス
    pub data_file: PathBuf,
    /// ウィンドウの初期サイズ
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            window_size: [800.0, 400.0],
        }
    }
}

impl AppConfig {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path.trim());
        }
        config
    }
}
