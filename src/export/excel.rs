//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成し、ファイルに書き出す

use crate::error::{PhotoRankError, Result};
use photo_rank_common::export::excel_core::generate_shortlist_workbook;
use photo_rank_common::ShortlistDelivery;
use std::path::Path;

pub fn write_excel(delivery: &ShortlistDelivery, output_path: &Path) -> Result<()> {
    let buffer = generate_shortlist_workbook(delivery).map_err(PhotoRankError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    tracing::debug!(path = %output_path.display(), photos = delivery.photos.len(), "excel written");
    Ok(())
}
