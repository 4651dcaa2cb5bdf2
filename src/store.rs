//! 賞一覧の保持 - 変更のたびにCSVへ全件書き戻す

use crate::award::AwardRecord;
use crate::error::{AwardError, Result};
use crate::storage::{load_awards, save_awards};
use std::path::{Path, PathBuf};

/// メモリ上の賞一覧とその保存先
#[derive(Debug)]
pub struct AwardStore {
    path: PathBuf,
    awards: Vec<AwardRecord>,
}

impl AwardStore {
    /// 保存先から一覧を読み込んで開く
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let awards = load_awards(&path)?;
        Ok(Self { path, awards })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn awards(&self) -> &[AwardRecord] {
        &self.awards
    }

    pub fn get(&self, index: usize) -> Option<&AwardRecord> {
        self.awards.get(index)
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    /// 末尾に追加
    pub fn add(&mut self, record: AwardRecord) -> Result<()> {
        let mut next = self.awards.clone();
        next.push(record);
        self.commit(next)
    }

    /// 指定位置のレコードを丸ごと置き換える
    pub fn update(&mut self, index: usize, record: AwardRecord) -> Result<()> {
        self.check_index(index)?;
        let mut next = self.awards.clone();
        next[index] = record;
        self.commit(next)
    }

    /// 指定位置のレコードを削除して返す
    pub fn remove(&mut self, index: usize) -> Result<AwardRecord> {
        self.check_index(index)?;
        let mut next = self.awards.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.awards.len() {
            Ok(())
        } else {
            Err(AwardError::IndexOutOfRange {
                index,
                len: self.awards.len(),
            })
        }
    }

    /// 保存に成功した場合のみメモリ上の一覧を差し替える
    fn commit(&mut self, next: Vec<AwardRecord>) -> Result<()> {
        if let Err(e) = save_awards(&self.path, &next) {
            tracing::error!("保存に失敗: {}: {}", self.path.display(), e);
            return Err(e);
        }
        self.awards = next;
        Ok(())
    }
}
