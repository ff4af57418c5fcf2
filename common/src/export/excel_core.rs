//! Excel生成（共通ライブラリ）
//!
//! ショートリストを1シートの一覧表として出力する

use crate::export::delivery::ShortlistDelivery;
use rust_xlsxwriter::*;

/// 列定義（見出し, 列幅）
const COLUMNS: &[(&str, f64)] = &[
    ("順位", 6.0),
    ("ID", 10.0),
    ("タイトル", 32.0),
    ("ショット", 11.0),
    ("ムード", 11.0),
    ("撮影場所", 16.0),
    ("人数", 6.0),
    ("スコア", 9.0),
    ("技術", 9.0),
    ("ストーリー", 9.0),
    ("適合", 9.0),
    ("タグ", 30.0),
];

const HEADER_ROW: u32 = 2;

/// Excelをバッファに生成
pub fn generate_shortlist_workbook(delivery: &ShortlistDelivery) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_font_size(11.0)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let score_format = text_format.clone().set_num_format("0.000");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Shortlist")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    worksheet
        .write_string_with_format(0, 0, &delivery.title, &title_format)
        .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;
    worksheet
        .write_string(
            1,
            0,
            format!(
                "{}枚 / 平均スコア {:.3} / 生成 {}",
                delivery.summary.count, delivery.summary.average_score, delivery.generated_at
            ),
        )
        .map_err(|e| format!("概要書き込みエラー: {}", e))?;

    for (col, (label, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(HEADER_ROW, col, *label, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }

    for (i, photo) in delivery.photos.iter().enumerate() {
        let row = HEADER_ROW + 1 + i as u32;
        let texts = [
            (1u16, photo.id.clone()),
            (2, photo.title.clone()),
            (3, photo.shot_type.to_string()),
            (4, photo.mood.to_string()),
            (5, photo.location.clone()),
            (11, photo.tags.join(", ")),
        ];
        let numbers = [
            (0u16, photo.rank as f64, &text_format),
            (6, photo.faces as f64, &text_format),
            (7, photo.score, &score_format),
            (8, photo.technical, &score_format),
            (9, photo.storytelling, &score_format),
            (10, photo.client_alignment, &score_format),
        ];

        for (col, value) in &texts {
            worksheet
                .write_string_with_format(row, *col, value, &text_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
        for (col, value, format) in numbers {
            worksheet
                .write_number_with_format(row, col, value, format)
                .map_err(|e| format!("数値書き込みエラー: {}", e))?;
        }
    }

    worksheet
        .set_freeze_panes(HEADER_ROW + 1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
