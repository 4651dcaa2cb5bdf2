//! CSVファイルへの読み書き

use crate::award::{AwardRecord, FIELD_COUNT};
use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::Path;

/// CSVから賞一覧を読み込む
///
/// ファイルが無ければ空の一覧を返す。列数の過不足は補正して読み込む。
pub fn load_awards(path: impl AsRef<Path>) -> Result<Vec<AwardRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("{} が存在しないため空の一覧で開始", path.display());
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut awards = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = normalize_row(row?, line + 1);
        awards.push(row.deserialize::<AwardRecord>(None)?);
    }

    tracing::info!("{} 件の賞を読み込み: {}", awards.len(), path.display());
    Ok(awards)
}

/// 賞一覧でCSVを上書き保存
pub fn save_awards(path: impl AsRef<Path>, awards: &[AwardRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for award in awards {
        writer.serialize(award)?;
    }
    writer.flush()?;

    tracing::debug!("{} 件の賞を保存: {}", awards.len(), path.display());
    Ok(())
}

/// 5列に揃える（不足は空欄で補い、余分は捨てる）
fn normalize_row(row: StringRecord, line: usize) -> StringRecord {
    if row.len() == FIELD_COUNT {
        return row;
    }

    tracing::warn!("{} 行目の列数が {} のため {} 列に補正", line, row.len(), FIELD_COUNT);
    (0..FIELD_COUNT)
        .map(|i| row.get(i).unwrap_or(""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_row_pads_short_rows() {
        let row = normalize_row(StringRecord::from(vec!["A賞", "2025-05-01"]), 1);
        assert_eq!(row.len(), FIELD_COUNT);
        assert_eq!(&row[1], "2025-05-01");
        assert_eq!(&row[4], "");
    }

    #[test]
    fn test_normalize_row_drops_extra_columns() {
        let row = normalize_row(StringRecord::from(vec!["a", "b", "c", "d", "e", "f"]), 1);
        assert_eq!(row.len(), FIELD_COUNT);
        assert_eq!(&row[4], "e");
    }
}
