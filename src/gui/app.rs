//! メインアプリケーションウィンドウ

use crate::award::AwardRecord;
use crate::calc::RowView;
use crate::controller::{
    apply_delete, apply_dialog, DeleteConfirmation, DialogOutcome, DialogStep, RecordDialog,
};
use crate::store::AwardStore;
use chrono::Local;
use eframe::egui;
use egui::{CentralPanel, RichText, TopBottomPanel};
use egui_extras::{Column, TableBuilder};

use super::dialogs::{show_award_details, show_delete_confirmation, show_record_dialog, PromptAction};
use super::theme::{days_color, progress_color, Colors};

const ROW_HEIGHT: f32 = 28.0;
const PROGRESS_BAR_WIDTH: f32 = 100.0;

/// 一覧の行で押されたボタン
enum RowAction {
    Details(usize),
    Edit(usize),
    Delete(usize),
}

/// アプリケーション状態
pub struct AwardCalendarApp {
    /// 賞一覧
    store: AwardStore,
    /// 追加・編集ダイアログ
    record_dialog: Option<RecordDialog>,
    /// 削除確認
    delete_confirmation: Option<DeleteConfirmation>,
    /// 詳細表示中のレコード
    details: Option<AwardRecord>,
    /// ステータスメッセージ
    status: String,
}

impl AwardCalendarApp {
    pub fn new(store: AwardStore) -> Self {
        let status = format!("{} 件の賞を読み込みました", store.len());
        Self {
            store,
            record_dialog: None,
            delete_confirmation: None,
            details: None,
            status,
        }
    }

    fn handle_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Details(index) => {
                self.details = self.store.get(index).cloned();
            }
            RowAction::Edit(index) => {
                if let Some(record) = self.store.get(index) {
                    self.record_dialog = Some(RecordDialog::edit(index, record));
                }
            }
            RowAction::Delete(index) => {
                if let Some(record) = self.store.get(index) {
                    self.delete_confirmation = Some(DeleteConfirmation::new(index, record));
                }
            }
        }
    }

    /// ダイアログの結果を反映
    fn finish_dialog(&mut self, outcome: DialogOutcome) {
        let label = match &outcome {
            DialogOutcome::Cancelled => return,
            DialogOutcome::Add(record) => format!("「{}」を追加しました", record.name),
            DialogOutcome::Edit { record, .. } => format!("「{}」を更新しました", record.name),
        };

        self.status = match apply_dialog(&mut self.store, outcome) {
            Ok(_) => label,
            Err(e) => format!("保存エラー: {}", e),
        };
    }

    fn finish_delete(&mut self, confirmation: DeleteConfirmation, confirmed: bool) {
        match apply_delete(&mut self.store, &confirmation, confirmed) {
            Ok(Some(removed)) => self.status = format!("「{}」を削除しました", removed.name),
            Ok(None) => {}
            Err(e) => self.status = format!("保存エラー: {}", e),
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = self.record_dialog.as_mut() {
            match show_record_dialog(ctx, dialog) {
                PromptAction::Submit => {
                    if let DialogStep::Done(outcome) = dialog.submit() {
                        self.record_dialog = None;
                        self.finish_dialog(outcome);
                    }
                }
                PromptAction::Cancel => {
                    if let Some(dialog) = self.record_dialog.take() {
                        self.finish_dialog(dialog.cancel());
                    }
                }
                PromptAction::None => {}
            }
        }

        if let Some(confirmation) = &self.delete_confirmation {
            if let Some(confirmed) = show_delete_confirmation(ctx, confirmation) {
                if let Some(confirmation) = self.delete_confirmation.take() {
                    self.finish_delete(confirmation, confirmed);
                }
            }
        }

        if let Some(record) = &self.details {
            if show_award_details(ctx, record) {
                self.details = None;
            }
        }
    }

    /// 賞一覧を描画（毎フレーム全行を作り直す）
    fn show_award_table(&self, ui: &mut egui::Ui) -> Option<RowAction> {
        let today = Local::now().date_naive();
        let rows: Vec<RowView> = self
            .store
            .awards()
            .iter()
            .map(|record| RowView::new(record, today))
            .collect();

        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .auto_shrink([false, false])
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(140.0).clip(true))
            .columns(Column::auto().at_least(110.0), 2)
            .columns(Column::auto().at_least(80.0), 2)
            .column(Column::exact(PROGRESS_BAR_WIDTH))
            .columns(Column::auto(), 2)
            .body(|mut body| {
                for (index, row_view) in rows.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            let name = RichText::new(&row_view.name).color(Colors::LINK);
                            if ui.link(name).clicked() {
                                action = Some(RowAction::Details(index));
                            }
                        });
                        row.col(|ui| {
                            ui.label(row_view.start_label.as_str());
                        });
                        row.col(|ui| {
                            ui.label(row_view.end_label.as_str());
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(row_view.days_label())
                                    .color(days_color(row_view.days_left)),
                            );
                        });
                        row.col(|ui| {
                            ui.label(row_view.progress_label());
                        });
                        row.col(|ui| {
                            ui.add(
                                egui::ProgressBar::new(row_view.progress.fraction())
                                    .desired_width(PROGRESS_BAR_WIDTH)
                                    .fill(progress_color(row_view.progress)),
                            );
                        });
                        row.col(|ui| {
                            if ui.button("編集").clicked() {
                                action = Some(RowAction::Edit(index));
                            }
                        });
                        row.col(|ui| {
                            if ui.button("削除").clicked() {
                                action = Some(RowAction::Delete(index));
                            }
                        });
                    });
                }
            });

        action
    }
}

impl eframe::App for AwardCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ステータスバー
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.status).size(13.0).color(Colors::TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("保存先: {}", self.store.path().display()))
                            .size(12.0)
                            .color(Colors::TEXT_SECONDARY),
                    );
                });
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button(RichText::new("賞を追加").size(16.0)).clicked() {
                    self.record_dialog = Some(RecordDialog::add());
                }
            });
            ui.add_space(6.0);

            if self.store.is_empty() {
                ui.label(
                    RichText::new("登録された賞はありません")
                        .color(Colors::TEXT_SECONDARY),
                );
                return;
            }

            if let Some(action) = self.show_award_table(ui) {
                self.handle_row_action(action);
            }
        });

        self.show_dialogs(ctx);
    }
}
