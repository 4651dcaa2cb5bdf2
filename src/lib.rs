//! 小説賞カレンダー - 応募締め切りと執筆進捗の管理ツール
//!
//! # 機能
//! - 賞ごとの応募開始日・締め切り日・文字数制限・現在の文字数を記録
//! - 締め切りまでの残り日数と進捗率を一覧表示
//! - 追加・編集・削除のたびにCSVへ全件保存

pub mod award;
pub mod calc;
pub mod config;
pub mod controller;
pub mod error;
pub mod gui;
pub mod storage;
pub mod store;

pub use award::AwardRecord;
pub use error::{AwardError, Result};
pub use store::AwardStore;
