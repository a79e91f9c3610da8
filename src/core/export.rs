use crate::domain::model::{ExportRow, ProblemDetail};
use crate::utils::error::{EtlError, Result};

pub const EXPORT_HEADER: [&str; 6] = [
    "id",
    "title",
    "likes",
    "dislikes",
    "like/dislikes_ratio",
    "difficulty",
];

/// 產生 CSV。即使沒有任何資料列也一定會寫出標題列。
pub fn to_csv(details: &[ProblemDetail]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for detail in details {
        writer.serialize(ExportRow::from(detail))?;
    }

    writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e.error()),
    })
}
