//! CSV reading operations.

use std::{io::Cursor, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReadOptions, CsvReader, DataType, PolarsError, PolarsResult}};
use tracing::debug;

use crate::dataset::MetricRow;
use crate::error::{AtlasError, Result};

/// Column headers of the metric table, as exported by the sales model.
pub(crate) mod columns {
    pub(crate) const CATEGORY: &str = "업종";
    pub(crate) const REGION: &str = "행정동";
    pub(crate) const PERFORMANCE_INDEX: &str = "서울 평균 대비 매출지수";
    pub(crate) const EXPECTED_SALES: &str = "예상매출(점포당)";
    pub(crate) const STORE_COUNT: &str = "점포_수";
    pub(crate) const WORKER_POPULATION: &str = "총_직장_인구_수";
    pub(crate) const FLOATING_POPULATION: &str = "총_유동인구_수";
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads the metric table at `path`.
pub(crate) fn read_metric_rows(path: &Path) -> Result<Vec<MetricRow>> {
    let bytes = std::fs::read(path).map_err(|e| AtlasError::from_io(path, e))?;
    let df = read_csv_bytes(&bytes)
        .map_err(|source| AtlasError::Csv { path: path.to_path_buf(), source })?;
    let rows = metric_rows_from_frame(&df)?;
    debug!(path = %path.display(), rows = rows.len(), "read metric table");
    Ok(rows)
}

/// Reads the metric table from an in-memory CSV string.
#[cfg(test)]
pub(crate) fn read_metric_rows_str(csv: &str) -> Result<Vec<MetricRow>> {
    let df = read_csv_bytes(csv.as_bytes())
        .map_err(|source| AtlasError::Csv { path: "<string>".into(), source })?;
    metric_rows_from_frame(&df)
}

/// Parse CSV bytes into a DataFrame, inferring column types over every row.
fn read_csv_bytes(bytes: &[u8]) -> PolarsResult<DataFrame> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None);

    CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
}

/// Fetch `name` from `df` cast to `dtype`.
fn required_column(df: &DataFrame, name: &'static str, dtype: DataType) -> Result<Column> {
    let column = df.column(name)
        .map_err(|_| AtlasError::MissingColumn { column: name })?;
    column.cast(&dtype)
        .map_err(|source| AtlasError::ColumnType { column: name, source })
}

/// Convert a DataFrame holding the required columns into metric rows.
/// Any other columns are ignored; a null in a required column is an error,
/// and so is a non-finite expected sales figure.
fn metric_rows_from_frame(df: &DataFrame) -> Result<Vec<MetricRow>> {
    use columns::*;

    let category = required_column(df, CATEGORY, DataType::String)?;
    let region = required_column(df, REGION, DataType::String)?;
    let index = required_column(df, PERFORMANCE_INDEX, DataType::Float64)?;
    let sales = required_column(df, EXPECTED_SALES, DataType::Float64)?;
    let stores = required_column(df, STORE_COUNT, DataType::Int64)?;
    let workers = required_column(df, WORKER_POPULATION, DataType::Int64)?;
    let floating = required_column(df, FLOATING_POPULATION, DataType::Int64)?;

    let type_error = |column: &'static str| move |source: PolarsError| AtlasError::ColumnType { column, source };
    let category = category.str().map_err(type_error(CATEGORY))?;
    let region = region.str().map_err(type_error(REGION))?;
    let index = index.f64().map_err(type_error(PERFORMANCE_INDEX))?;
    let sales = sales.f64().map_err(type_error(EXPECTED_SALES))?;
    let stores = stores.i64().map_err(type_error(STORE_COUNT))?;
    let workers = workers.i64().map_err(type_error(WORKER_POPULATION))?;
    let floating = floating.i64().map_err(type_error(FLOATING_POPULATION))?;

    (0..df.height())
        .map(|i| {
            let row = i + 1;
            let missing = |column: &'static str| AtlasError::InvalidValue { row, column };
            Ok(MetricRow {
                category: category.get(i).ok_or_else(|| missing(CATEGORY))?.to_string(),
                region_name: region.get(i).ok_or_else(|| missing(REGION))?.to_string(),
                performance_index: index.get(i).ok_or_else(|| missing(PERFORMANCE_INDEX))?,
                expected_sales_per_store: sales.get(i)
                    .filter(|sales| sales.is_finite())
                    .ok_or_else(|| missing(EXPECTED_SALES))?,
                store_count: stores.get(i).ok_or_else(|| missing(STORE_COUNT))?,
                worker_population: workers.get(i).ok_or_else(|| missing(WORKER_POPULATION))?,
                floating_population: floating.get(i).ok_or_else(|| missing(FLOATING_POPULATION))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "업종,행정동,서울 평균 대비 매출지수,예상매출(점포당),점포_수,총_직장_인구_수,총_유동인구_수";

    #[test]
    fn reads_required_columns() {
        let csv = format!("{HEADER}\n한식음식점,삼성1동,2.25,175670000.5,271,120000,350000\n커피-음료,소공동,4.13,160560000,12,98000,410000\n");
        let rows = read_metric_rows_str(&csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "한식음식점");
        assert_eq!(rows[0].region_name, "삼성1동");
        assert_eq!(rows[0].performance_index, 2.25);
        assert_eq!(rows[0].expected_sales_per_store, 175670000.5);
        assert_eq!(rows[0].store_count, 271);
        assert_eq!(rows[1].region_name, "소공동");
        assert_eq!(rows[1].expected_sales_per_store, 160560000.0);
        assert_eq!(rows[1].floating_population, 410000);
    }

    #[test]
    fn ignores_extra_columns_and_bom() {
        let csv = format!("\u{feff}{HEADER},순위\n제과점,구로5동,3.64,175180000,7,50000,90000,1\n");
        let rows = read_metric_rows_str(&csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "제과점");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "업종,행정동\n카페,A동\n";
        let err = read_metric_rows_str(csv).unwrap_err();
        assert!(matches!(err, AtlasError::MissingColumn { column } if column == columns::PERFORMANCE_INDEX));
    }

    #[test]
    fn null_value_is_reported_with_row() {
        let csv = format!("{HEADER}\n카페,A동,1.0,100,1,1,1\n카페,B동,,100,1,1,1\n");
        let err = read_metric_rows_str(&csv).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidValue { row: 2, column } if column == columns::PERFORMANCE_INDEX));
    }

    #[test]
    fn nan_sales_is_reported_with_row() {
        let csv = format!("{HEADER}\n카페,A동,2.0,NaN,3,1,1\n");
        let err = read_metric_rows_str(&csv).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidValue { row: 1, column } if column == columns::EXPECTED_SALES));
    }

    #[test]
    fn names_keep_surrounding_whitespace() {
        let csv = format!("{HEADER}\n\"카페 \",\" A동\",2.0,100,3,1,1\n");
        let rows = read_metric_rows_str(&csv).unwrap();
        assert_eq!(rows[0].category, "카페 ");
        assert_eq!(rows[0].region_name, " A동");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_metric_rows(Path::new("/nonexistent/top5.csv")).unwrap_err();
        assert!(matches!(err, AtlasError::NotFound { .. }));
    }
}
