//! 追加・編集・削除の操作フロー
//!
//! 入力ダイアログは5項目を1つずつ尋ね、途中でキャンセルされた場合は
//! 何も変更しない。確定した結果だけが `AwardStore` に反映される。

use crate::award::{AwardRecord, FIELD_COUNT};
use crate::error::Result;
use crate::store::AwardStore;

/// 入力ダイアログの1ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStep {
    pub title: &'static str,
    pub prompt: &'static str,
}

const fn step(title: &'static str, prompt: &'static str) -> PromptStep {
    PromptStep { title, prompt }
}

const ADD_STEPS: [PromptStep; FIELD_COUNT] = [
    step("賞の追加", "賞の名前は？"),
    step("応募開始日", "形式: 2025-05-01"),
    step("締切日", "形式: 2025-07-31"),
    step("文字数制限", "例: 30000～100000"),
    step("現在の文字数", "数字のみ"),
];

const EDIT_STEPS: [PromptStep; FIELD_COUNT] = [
    step("賞名編集", "賞名:"),
    step("応募開始日", "形式: 2025-05-01"),
    step("締切日", "形式: 2025-07-31"),
    step("文字数制限", "例: 30000～100000"),
    step("現在の文字数", "数字のみ"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit { index: usize },
}

/// ダイアログの最終結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Cancelled,
    Add(AwardRecord),
    Edit { index: usize, record: AwardRecord },
}

/// `RecordDialog::submit` の戻り値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStep {
    /// 次の項目へ進んだ
    Next,
    /// 全項目の入力が終わった、または中断した
    Done(DialogOutcome),
}

/// 追加・編集用の逐次入力ダイアログ
#[derive(Debug, Clone)]
pub struct RecordDialog {
    mode: DialogMode,
    step: usize,
    input: String,
    answers: Vec<String>,
    initial: Option<AwardRecord>,
}

impl RecordDialog {
    pub fn add() -> Self {
        Self {
            mode: DialogMode::Add,
            step: 0,
            input: String::new(),
            answers: Vec::with_capacity(FIELD_COUNT),
            initial: None,
        }
    }

    /// 既存の値を初期値にして編集を始める
    pub fn edit(index: usize, record: &AwardRecord) -> Self {
        Self {
            mode: DialogMode::Edit { index },
            step: 0,
            input: record.name.clone(),
            answers: Vec::with_capacity(FIELD_COUNT),
            initial: Some(record.clone()),
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    /// 現在のステップ番号 (0始まり)
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> PromptStep {
        let steps = match self.mode {
            DialogMode::Add => &ADD_STEPS,
            DialogMode::Edit { .. } => &EDIT_STEPS,
        };
        steps[self.step.min(FIELD_COUNT - 1)]
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// 現在の入力を確定して次へ進む
    ///
    /// 追加時に賞名が空なら中断する。
    pub fn submit(&mut self) -> DialogStep {
        let answer = std::mem::take(&mut self.input);
        if self.mode == DialogMode::Add && self.step == 0 && answer.is_empty() {
            return DialogStep::Done(DialogOutcome::Cancelled);
        }

        self.answers.push(answer);
        self.step += 1;

        if self.step < FIELD_COUNT {
            self.input = self
                .initial
                .as_ref()
                .map(|record| record.fields()[self.step].to_string())
                .unwrap_or_default();
            return DialogStep::Next;
        }

        let Ok(fields) = <[String; FIELD_COUNT]>::try_from(std::mem::take(&mut self.answers)) else {
            return DialogStep::Done(DialogOutcome::Cancelled);
        };
        let record = AwardRecord::from_fields(fields);

        DialogStep::Done(match self.mode {
            DialogMode::Add => DialogOutcome::Add(record),
            DialogMode::Edit { index } => DialogOutcome::Edit { index, record },
        })
    }

    /// 入力を中断（途中までの回答は捨てる）
    pub fn cancel(self) -> DialogOutcome {
        DialogOutcome::Cancelled
    }
}

/// 削除確認
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    index: usize,
    name: String,
}

impl DeleteConfirmation {
    pub const TITLE: &'static str = "削除確認";

    pub fn new(index: usize, record: &AwardRecord) -> Self {
        Self {
            index,
            name: record.name.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> String {
        format!("{} を削除しますか？", self.name)
    }
}

/// ダイアログの結果を一覧に反映。変更があれば `true`
pub fn apply_dialog(store: &mut AwardStore, outcome: DialogOutcome) -> Result<bool> {
    match outcome {
        DialogOutcome::Cancelled => Ok(false),
        DialogOutcome::Add(record) => {
            tracing::info!("賞を追加: {}", record.name);
            store.add(record)?;
            Ok(true)
        }
        DialogOutcome::Edit { index, record } => {
            tracing::info!("賞を更新: {} -> {}", index, record.name);
            store.update(index, record)?;
            Ok(true)
        }
    }
}

/// 確認結果に応じて削除。削除したレコードを返す
pub fn apply_delete(
    store: &mut AwardStore,
    confirmation: &DeleteConfirmation,
    confirmed: bool,
) -> Result<Option<AwardRecord>> {
    if !confirmed {
        return Ok(None);
    }
    let removed = store.remove(confirmation.index)?;
    tracing::info!("賞を削除: {}", removed.name);
    Ok(Some(removed))
}
