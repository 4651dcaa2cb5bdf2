//! GUIモジュール - egui による一覧画面とダイアログ

mod app;
mod dialogs;
mod theme;

pub use app::AwardCalendarApp;

use crate::config::AppConfig;
use crate::store::AwardStore;
use anyhow::{Context, Result};
use eframe::egui;

const APP_TITLE: &str = "小説賞カレンダー";

/// アプリケーションを起動
///
/// データファイルが壊れている場合はウィンドウを開かずにエラーを返す。
pub fn run(config: AppConfig) -> Result<()> {
    let store = AwardStore::open(&config.data_file)
        .with_context(|| format!("賞一覧の読み込みに失敗: {}", config.data_file.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 300.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_style(theme::dark_theme());
            cc.egui_ctx.set_fonts(theme::japanese_fonts());

            Ok(Box::new(AwardCalendarApp::new(store)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("アプリケーションエラー: {}", e))
}
