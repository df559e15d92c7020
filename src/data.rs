//! Seat data loading and cluster export using Polars

use crate::error::DataShapeError;
use crate::grid::SeatGrid;
use crate::point::PointPool;
use anyhow::Context;
use ndarray::Array2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column holding the cluster id in exported files
pub const CLUSTER_COLUMN: &str = "cid";

/// Load a CSV file with a header row into a point pool
///
/// Every named column becomes an attribute. Unnamed or entirely empty columns
/// (a trailing comma on each line) and an existing `cid` column are skipped.
/// Every remaining cell must be numeric.
pub fn load_points(file_path: impl AsRef<Path>) -> crate::Result<PointPool> {
    let df = read_frame(file_path.as_ref())?;
    frame_to_pool(&df)
}

/// Load a CSV file as a seat grid, row by row and aisle by aisle
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `grid` - Grid dimensions; the first `rows * aisles` records are used
///
/// # Returns
/// * `PointPool` whose point `i` is the seat `grid.seat(i)`
pub fn load_seat_grid(file_path: impl AsRef<Path>, grid: SeatGrid) -> crate::Result<PointPool> {
    let df = read_frame(file_path.as_ref())?;

    if df.height() < grid.len() {
        return Err(DataShapeError::GridMismatch {
            rows: grid.rows,
            aisles: grid.aisles,
            points: df.height(),
        }
        .into());
    }
    if df.height() > grid.len() {
        log::warn!(
            "ignoring {} records beyond the {}x{} grid",
            df.height() - grid.len(),
            grid.rows,
            grid.aisles
        );
    }

    frame_to_pool(&df.slice(0, grid.len()))
}

/// Write every point with its cluster id
///
/// The header is the pool attributes followed by `cid`; rows follow pool
/// order. Unassigned points get an empty `cid` cell.
pub fn export_clusters(file_path: impl AsRef<Path>, pool: &PointPool) -> crate::Result<()> {
    let path = file_path.as_ref();

    let mut columns: Vec<Series> = pool
        .attributes()
        .iter()
        .enumerate()
        .map(|(col, name)| Series::new(name, pool.values().column(col).to_vec()))
        .collect();
    let cids: Vec<Option<u32>> = pool
        .assignments()
        .iter()
        .map(|a| a.map(|id| id as u32))
        .collect();
    columns.push(Series::new(CLUSTER_COLUMN, cids));

    let mut df = DataFrame::new(columns)?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("exported {} points to {}", pool.len(), path.display());
    Ok(())
}

fn read_frame(path: &Path) -> crate::Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if df.width() == 0 {
        anyhow::bail!("No columns found in {}", path.display());
    }
    Ok(df)
}

/// Convert the numeric columns of a frame into a point pool
fn frame_to_pool(df: &DataFrame) -> crate::Result<PointPool> {
    let columns: Vec<&Series> = df
        .get_columns()
        .iter()
        .filter(|s| {
            let name = s.name();
            let keep = !name.trim().is_empty()
                && name != CLUSTER_COLUMN
                && (s.is_empty() || s.null_count() < s.len());
            if !keep {
                log::debug!("skipping column '{}'", name);
            }
            keep
        })
        .collect();

    let attributes: Vec<String> = columns.iter().map(|s| s.name().to_string()).collect();
    let mut values = Array2::<f64>::zeros((df.height(), columns.len()));

    for (col, series) in columns.iter().enumerate() {
        let floats = series.cast(&DataType::Float64)?;
        for (point, value) in floats.f64()?.into_iter().enumerate() {
            values[[point, col]] = value.ok_or_else(|| DataShapeError::NonFiniteValue {
                point,
                attribute: attributes[col].clone(),
            })?;
        }
    }

    Ok(PointPool::new(attributes, values)?)
}
