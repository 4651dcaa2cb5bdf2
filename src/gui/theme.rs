//! テーマ設定 - ダークテーマと日本語フォント

use crate::calc::{DaysLeft, Progress};
use egui::{Color32, CornerRadius, FontData, FontDefinitions, FontFamily, Stroke, Style, Visuals};

/// カラーパレット
pub struct Colors;

impl Colors {
    pub const BG_DARK: Color32 = Color32::from_rgb(10, 15, 26);
    pub const BG_CARD: Color32 = Color32::from_rgb(18, 26, 45);
    pub const BG_HOVER: Color32 = Color32::from_rgb(26, 37, 64);
    pub const ACCENT: Color32 = Color32::from_rgb(255, 107, 91);
    pub const LINK: Color32 = Color32::from_rgb(110, 168, 254);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(139, 157, 195);
    pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
    pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
}

/// 締め切りが近いとみなす日数
const DEADLINE_WARNING_DAYS: i64 = 14;

/// 日本語フォントの候補（先に見つかったものを使う）
const JAPANESE_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
];

/// ダークテーマのスタイルを作成
pub fn dark_theme() -> Style {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Colors::BG_DARK;
    visuals.window_fill = Colors::BG_CARD;
    visuals.extreme_bg_color = Colors::BG_DARK;
    visuals.faint_bg_color = Colors::BG_CARD;
    visuals.hyperlink_color = Colors::LINK;

    visuals.widgets.inactive.bg_fill = Colors::BG_CARD;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Colors::TEXT_PRIMARY);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

    visuals.widgets.hovered.bg_fill = Colors::BG_HOVER;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Colors::TEXT_PRIMARY);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

    visuals.widgets.active.bg_fill = Colors::ACCENT;
    visuals.widgets.active.corner_radius = CornerRadius::same(6);

    visuals.selection.bg_fill = Colors::ACCENT.gamma_multiply(0.5);
    visuals.selection.stroke = Stroke::new(1.0, Colors::ACCENT);

    style.visuals = visuals;
    style
}

/// システムの日本語フォントを追加したフォント定義
pub fn japanese_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    let Some((path, font_data)) = JAPANESE_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (path, data)))
    else {
        tracing::warn!("日本語フォントが見つからないため既定フォントを使用");
        return fonts;
    };

    tracing::debug!("日本語フォントを使用: {}", path);
    fonts.font_data.insert(
        "japanese".to_owned(),
        FontData::from_owned(font_data).into(),
    );
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, "japanese".to_owned());
    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .push("japanese".to_owned());

    fonts
}

/// 残り日数の表示色
pub fn days_color(days: DaysLeft) -> Color32 {
    match days {
        DaysLeft::Remaining(n) if n <= DEADLINE_WARNING_DAYS => Colors::WARNING,
        DaysLeft::Remaining(_) => Colors::TEXT_PRIMARY,
        DaysLeft::Passed => Colors::TEXT_SECONDARY,
        DaysLeft::DateError => Colors::ERROR,
    }
}

/// 進捗バーの色
pub fn progress_color(progress: Progress) -> Color32 {
    if progress.percent() >= 100 {
        Colors::SUCCESS
    } else {
        Colors::ACCENT
    }
}
