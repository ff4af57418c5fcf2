use crate::error::Result;
use photo_rank_common::ShortlistDelivery;
use std::path::Path;

pub fn write_json(delivery: &ShortlistDelivery, output_path: &Path) -> Result<()> {
    let json = delivery.to_json()?;
    std::fs::write(output_path, json)?;
    tracing::debug!(path = %output_path.display(), photos = delivery.photos.len(), "json written");
    Ok(())
}
