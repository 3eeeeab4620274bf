//! Workbook writer

use crate::record::{Description, FilmRecord};
use crate::ScrapeError;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Localized column headers, in output column order
const COLUMN_HEADERS: [&str; 6] = ["发布年份", "电影名称", "编剧", "发行单位", "备案地", "梗概"];

/// Writes all records to a single-sheet xlsx workbook
///
/// Records are emitted in slice order, one row each, below the header row.
/// A record whose description is still a detail-page reference is an error:
/// raw URLs must never reach the output.
///
/// # Arguments
///
/// * `films` - The aggregated records
/// * `path` - Destination workbook path
pub fn write_workbook(films: &[FilmRecord], path: &Path) -> Result<(), ScrapeError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, film) in films.iter().enumerate() {
        let description = match &film.description {
            Description::Text(text) => text.as_str(),
            Description::DetailPage(_) => {
                return Err(ScrapeError::UnresolvedDescription {
                    film_name: film.film_name.clone(),
                })
            }
        };

        let row = index as u32 + 1;
        worksheet.write_string(row, 0, &film.release_year)?;
        worksheet.write_string(row, 1, &film.film_name)?;
        worksheet.write_string(row, 2, film.director.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 3, &film.publisher)?;
        worksheet.write_string(row, 4, &film.registration_place)?;
        worksheet.write_string(row, 5, description)?;
    }

    workbook.save(path)?;
    tracing::info!("wrote {} records to {}", films.len(), path.display());

    Ok(())
}
