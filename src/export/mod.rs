pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use photo_rank_common::export::file_name_for;
use photo_rank_common::ShortlistDelivery;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name_for(title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let excel_path = output.join(file_name_for(title, "xlsx"));
        let json_path = output.join(file_name_for(title, "json"));
        (excel_path, json_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let excel_path = parent.join(file_name_for(stem, "xlsx"));
        let json_path = parent.join(file_name_for(stem, "json"));
        (excel_path, json_path)
    }
}

/// 納品ファイルを出力し、書き出したパスを返す
pub fn export_delivery(
    delivery: &ShortlistDelivery,
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    }

    let written = match format {
        ExportFormat::Excel => {
            let path = output_path_for_format(output, &delivery.title, "xlsx");
            println!("- Excelを生成中...");
            excel::write_excel(delivery, &path)?;
            println!("✔ Excel出力: {}", path.display());
            vec![path]
        }
        ExportFormat::Json => {
            let path = output_path_for_format(output, &delivery.title, "json");
            json::write_json(delivery, &path)?;
            println!("✔ JSON出力: {}", path.display());
            vec![path]
        }
        ExportFormat::Both => {
            let (excel_path, json_path) = output_paths_for_both(output, &delivery.title);

            println!("- Excelを生成中...");
            excel::write_excel(delivery, &excel_path)?;
            println!("✔ Excel出力: {}", excel_path.display());

            json::write_json(delivery, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());
            vec![excel_path, json_path]
        }
    };

    Ok(written)
}
