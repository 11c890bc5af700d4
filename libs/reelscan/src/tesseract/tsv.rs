use super::error::{Result, TesseractError};
use super::types::WordBox;

const TSV_COLUMNS: usize = 12;

/// Parses the output of `tesseract <image> stdout tsv`.
///
/// The header row is skipped. Structural rows (page, block, paragraph, line)
/// carry an empty text column which some builds drop entirely.
pub fn parse_tsv(output: &str) -> Result<Vec<WordBox>> {
    let mut boxes = Vec::new();

    for (idx, raw) in output.lines().enumerate() {
        let line_no = idx + 1;
        let row = raw.trim_end_matches('\r');
        if row.trim().is_empty() || row.starts_with("level\t") {
            continue;
        }

        let fields: Vec<&str> = row.splitn(TSV_COLUMNS, '\t').collect();
        if fields.len() < TSV_COLUMNS - 1 {
            return Err(TesseractError::TsvParse {
                line: line_no,
                reason: format!("expected {} columns, found {}", TSV_COLUMNS, fields.len()),
            });
        }

        let int = |col: usize| -> Result<i32> {
            fields[col].trim().parse::<i32>().map_err(|e| TesseractError::TsvParse {
                line: line_no,
                reason: format!("column {}: {}", col + 1, e),
            })
        };
        let conf = fields[10].trim().parse::<f32>().map_err(|e| TesseractError::TsvParse {
            line: line_no,
            reason: format!("conf: {}", e),
        })?;

        boxes.push(WordBox {
            level: int(0)?,
            page_num: int(1)?,
            block_num: int(2)?,
            par_num: int(3)?,
            line_num: int(4)?,
            word_num: int(5)?,
            left: int(6)?,
            top: int(7)?,
            width: int(8)?,
            height: int(9)?,
            conf,
            text: fields.get(11).map(|t| t.to_string()).unwrap_or_default(),
        });
    }

    Ok(boxes)
}

/// Joins recognised words, optionally prefixed with their top-left corner
/// normalised to the page size.
pub fn boxes_to_text(boxes: &[WordBox], add_bounding_boxes: bool) -> String {
    // the first row is the page itself
    let (width, height) = boxes
        .first()
        .filter(|page| page.width > 0 && page.height > 0)
        .map(|page| (page.width as f32, page.height as f32))
        .unwrap_or((1.0, 1.0));

    boxes
        .iter()
        .filter(|b| !b.text.trim().is_empty())
        .map(|b| {
            if add_bounding_boxes {
                let x = b.left as f32 / width;
                let y = b.top as f32 / height;
                format!("({:.2}, {:.2}) {}", x, y, b.text.trim())
            } else {
                b.text.trim().to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
