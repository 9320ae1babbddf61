use crate::constants::{
    ANNUAL_SALARY_COL, MINUTES_COL, REPORT_COLUMNS, SALARIES_JOIN_KEY, SALARY_PER_MINUTE_COL,
    STATS_JOIN_KEY,
};
use crate::transform::error::TransformError;
use log::{debug, info, warn};
use polars::prelude::{
    DataFrame, DataType, IntoLazy, JoinArgs, JoinType, MaintainOrderJoin, PolarsError, col,
};
use std::collections::HashSet;

/// Lower-cases a column name and replaces spaces with underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Normalizes every column name of `data`.
///
/// Columns are visited left to right, so the first column claiming a normalized name keeps it.
/// Later columns that collide get a `_right` suffix, the same suffix a join gives clashing
/// right-hand columns.
fn normalize_column_names(mut data: DataFrame) -> Result<DataFrame, PolarsError> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut normalized: Vec<String> = Vec::with_capacity(data.width());

    for name in data.get_column_names() {
        let base = normalize_column_name(name.as_str());
        let mut candidate = base.clone();
        while taken.contains(&candidate) {
            candidate.push_str("_right");
        }
        if candidate != base {
            warn!("Column '{name}' clashes after normalization and is renamed to '{candidate}'");
        }
        taken.insert(candidate.clone());
        normalized.push(candidate);
    }

    data.set_column_names(normalized)?;
    Ok(data)
}

/// Builds the salary per minute report.
///
/// Every row of `player_stats` is kept and matched against `player_salaries` on
/// `name == Player`. Players without a salary get a null `salary_per_minute`, and a null
/// `name` never matches a salary row, not even one with a null `Player`.
/// Zero minutes are not special-cased and produce an infinite value.
pub fn build_salary_report(
    player_stats: &DataFrame,
    player_salaries: &DataFrame,
) -> Result<DataFrame, TransformError> {
    info!(
        "Joining {} player stats with {} player salaries",
        player_stats.height(),
        player_salaries.height()
    );

    let mut join_args = JoinArgs::new(JoinType::Left);
    join_args.maintain_order = MaintainOrderJoin::Left;

    let merged = player_stats
        .clone()
        .lazy()
        .join(
            player_salaries.clone().lazy(),
            [col(STATS_JOIN_KEY)],
            [col(SALARIES_JOIN_KEY)],
            join_args,
        )
        .with_column(
            (col(ANNUAL_SALARY_COL).cast(DataType::Float64)
                / col(MINUTES_COL).cast(DataType::Float64))
            .alias(SALARY_PER_MINUTE_COL),
        )
        .collect()?;
    debug!("Merged columns: {:?}", merged.get_column_names());

    let report = normalize_column_names(merged)?.select(REPORT_COLUMNS)?;

    info!("Built report with {} rows", report.height());
    Ok(report)
}
