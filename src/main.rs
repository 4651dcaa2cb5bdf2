//! 小説賞カレンダー - メインエントリポイント

use anyhow::Result;
use award_calendar::config::AppConfig;

fn main() -> Result<()> {
    // ロギング初期化
    tracing_subscriber::fmt::init();

    // 環境変数の読み込み
    dotenvy::dotenv().ok();

    // GUIアプリケーション起動
    award_calendar::gui::run(AppConfig::from_env())
}
