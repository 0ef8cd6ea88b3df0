//! Sensor history reports and exports
//!
//! The report table is generated from the current sensor fleet: a few days
//! of history per sensor, with numeric readings varied by a small
//! deterministic offset.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Reading, ReportFilter, ReportRow, Sensor, REPORT_COLUMNS};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::DashboardStore;

/// UTF-8 byte order mark so spreadsheet tools detect the encoding
const UTF8_BOM: &str = "\u{feff}";

/// Time of day stamped on every generated reading
const REPORT_TIME: &str = "12:00";

// A4 portrait layout, millimetres
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;
const FIRST_TABLE_TOP: f32 = 255.0;
const TABLE_TOP: f32 = 280.0;
const TABLE_BOTTOM: f32 = 20.0;
const COLUMN_X: [f32; 6] = [15.0, 40.0, 58.0, 115.0, 145.0, 170.0];

/// Rows that fit below the title block on the first page
pub const FIRST_PAGE_ROWS: usize = 33;

/// Rows that fit on every following page
pub const PAGE_ROWS: usize = 37;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: DashboardStore,
    history_days: u32,
}

/// Filtered report table
#[derive(Debug, Serialize)]
pub struct ReportTable {
    pub total: usize,
    pub rows: Vec<ReportRow>,
}

impl ReportingService {
    pub fn new(store: DashboardStore, config: &Config) -> Self {
        Self {
            store,
            history_days: config.reports.history_days,
        }
    }

    /// Report rows matching `filter`
    pub async fn get_report(&self, filter: &ReportFilter) -> AppResult<ReportTable> {
        let data = self.store.read().await;
        let rows = filter.apply(generate_history(
            &data.sensors,
            data.seeded_at.date_naive(),
            self.history_days,
        ));
        Ok(ReportTable {
            total: rows.len(),
            rows,
        })
    }

    /// Export rows as CSV with a byte order mark
    pub fn export_to_csv(rows: &[ReportRow]) -> AppResult<String> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(UTF8_BOM.as_bytes().to_vec());

        wtr.write_record(REPORT_COLUMNS)
            .map_err(|e| AppError::Export(format!("CSV serialization error: {}", e)))?;
        for row in rows {
            wtr.write_record(row.cells())
                .map_err(|e| AppError::Export(format!("CSV serialization error: {}", e)))?;
        }

        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Export(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Export(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }

    /// Export rows as a paginated A4 PDF
    pub fn export_to_pdf(rows: &[ReportRow], generated_at: DateTime<Utc>) -> AppResult<Vec<u8>> {
        let title = "AgriDash Sensor Report";
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Export(format!("PDF font error: {:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Export(format!("PDF font error: {:?}", e)))?;

        let pages = paginate(rows, FIRST_PAGE_ROWS, PAGE_ROWS);
        let mut current = doc.get_page(page).get_layer(layer);

        for (index, chunk) in pages.iter().enumerate() {
            let top = if index == 0 {
                current.use_text(title, 18.0, Mm(MARGIN), Mm(280.0), &bold);
                current.use_text(
                    format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
                    10.0,
                    Mm(MARGIN),
                    Mm(272.0),
                    &font,
                );
                current.use_text(
                    format!("Rows: {}", rows.len()),
                    10.0,
                    Mm(MARGIN),
                    Mm(266.0),
                    &font,
                );
                FIRST_TABLE_TOP
            } else {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Page {}", index + 1));
                current = doc.get_page(page).get_layer(layer);
                TABLE_TOP
            };

            debug_assert!(top - ROW_HEIGHT * chunk.len() as f32 >= TABLE_BOTTOM);
            draw_row(&current, &REPORT_COLUMNS.map(|c| c.to_string()), top, &bold);
            for (i, row) in chunk.iter().enumerate() {
                let y = top - ROW_HEIGHT * (i + 1) as f32;
                if i % 2 == 1 {
                    shade_row(&current, y);
                }
                draw_row(&current, &row.cells(), y, &font);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| AppError::Export(format!("PDF encoding error: {:?}", e)))
    }
}

fn shade_row(layer: &PdfLayerReference, y: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.94, 0.96, 0.98, None)));
    layer.add_rect(Rect::new(
        Mm(MARGIN - 1.0),
        Mm(y - 2.0),
        Mm(PAGE_WIDTH - MARGIN + 1.0),
        Mm(y + ROW_HEIGHT - 2.0),
    ));
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

fn draw_row(layer: &PdfLayerReference, cells: &[String; 6], y: f32, font: &IndirectFontRef) {
    for (cell, x) in cells.iter().zip(COLUMN_X) {
        layer.use_text(cell.as_str(), 9.0, Mm(x), Mm(y), font);
    }
}

/// Split rows into pages: `first` rows on page one, `rest` on the others.
/// Always yields at least one page.
pub fn paginate<T>(rows: &[T], first: usize, rest: usize) -> Vec<&[T]> {
    let split = first.min(rows.len());
    let (head, tail) = rows.split_at(split);
    let mut pages = vec![head];
    pages.extend(tail.chunks(rest.max(1)));
    pages
}

/// Offset in [-1.0, 1.0] applied to a numeric reading
pub fn jitter(sensor_index: usize, day: u32) -> Decimal {
    let step = (sensor_index * 7 + day as usize * 3) % 21;
    Decimal::new(step as i64 - 10, 1)
}

/// `days` rows per sensor, day 0 being `today`
pub fn generate_history(sensors: &[Sensor], today: NaiveDate, days: u32) -> Vec<ReportRow> {
    sensors
        .iter()
        .enumerate()
        .flat_map(|(index, sensor)| {
            (0..days).map(move |day| ReportRow {
                id: format!("{}-{}", sensor.id, day),
                date: today - Duration::days(i64::from(day)),
                time: REPORT_TIME.to_string(),
                field_id: sensor.field_id.clone(),
                sensor_name: sensor.name.clone(),
                sensor_type: sensor.sensor_type,
                value: match &sensor.value {
                    Reading::Numeric(v) => Reading::Numeric((*v + jitter(index, day)).round_dp(2)),
                    Reading::Text(t) => Reading::Text(t.clone()),
                },
                unit: sensor.unit.clone(),
                status: sensor.status,
            })
        })
        .collect()
}
