//! モーダルダイアログの描画

use crate::award::{AwardRecord, FIELD_COUNT};
use crate::controller::{DeleteConfirmation, RecordDialog};
use egui::{Id, Key, Modal, RichText};

use super::theme::Colors;

/// 入力ダイアログでの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    None,
    Submit,
    Cancel,
}

/// 追加・編集ダイアログの現在のステップを表示
pub fn show_record_dialog(ctx: &egui::Context, dialog: &mut RecordDialog) -> PromptAction {
    let step = dialog.current_step();
    let step_index = dialog.step_index();

    let response = Modal::new(Id::new("record_dialog")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.horizontal(|ui| {
            ui.heading(step.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}/{}", step_index + 1, FIELD_COUNT))
                        .color(Colors::TEXT_SECONDARY),
                );
            });
        });
        ui.label(step.prompt);

        let edit = ui.add(
            egui::TextEdit::singleline(dialog.input_mut())
                .id(Id::new(("record_dialog_input", step_index)))
                .desired_width(f32::INFINITY),
        );
        if !edit.has_focus() && !edit.lost_focus() {
            edit.request_focus();
        }
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        ui.add_space(8.0);
        let mut action = PromptAction::None;
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() || entered {
                action = PromptAction::Submit;
            }
            if ui.button("キャンセル").clicked() {
                action = PromptAction::Cancel;
            }
        });
        action
    });

    if response.should_close() && response.inner == PromptAction::None {
        PromptAction::Cancel
    } else {
        response.inner
    }
}

/// 削除確認。はい/いいえが押されたら `Some`
pub fn show_delete_confirmation(
    ctx: &egui::Context,
    confirmation: &DeleteConfirmation,
) -> Option<bool> {
    let response = Modal::new(Id::new("delete_confirmation")).show(ctx, |ui| {
        ui.heading(DeleteConfirmation::TITLE);
        ui.label(confirmation.message());
        ui.add_space(8.0);

        let mut answer = None;
        ui.horizontal(|ui| {
            if ui.button(RichText::new("はい").color(Colors::ERROR)).clicked() {
                answer = Some(true);
            }
            if ui.button("いいえ").clicked() {
                answer = Some(false);
            }
        });
        answer
    });

    if response.should_close() && response.inner.is_none() {
        Some(false)
    } else {
        response.inner
    }
}

/// 賞の詳細。閉じられたら `true`
pub fn show_award_details(ctx: &egui::Context, record: &AwardRecord) -> bool {
    let response = Modal::new(Id::new("award_details")).show(ctx, |ui| {
        ui.heading("賞の詳細");
        ui.add_space(4.0);
        ui.label(record.detail_text());
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    response.inner || response.should_close()
}
