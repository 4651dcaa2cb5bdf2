//! エラー定義

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwardError {
    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("存在しない行です: {index} (全 {len} 件)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AwardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = AwardError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "存在しない行です: 3 (全 2 件)");
    }
}
