pub const PLAYER_STATS: &str = "player_stats";
pub const PLAYER_SALARIES: &str = "player_salaries";

pub const STATS_JOIN_KEY: &str = "name";
pub const SALARIES_JOIN_KEY: &str = "Player";

pub const ANNUAL_SALARY_COL: &str = "Annual";
pub const MINUTES_COL: &str = "minutes";
pub const SALARY_PER_MINUTE_COL: &str = "salary_per_minute";

/// Columns of the exported report, in output order.
pub const REPORT_COLUMNS: [&str; 7] = [
    "name",
    "team",
    "age",
    "nation",
    "position",
    "minutes",
    "salary_per_minute",
];

pub const DEFAULT_REPORT_FILE: &str = "player_salary_report.xlsx";
pub const DEFAULT_DATASET_DIR: &str = "Datasets";
pub const EXCEL_EXTENSION: &str = "xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
