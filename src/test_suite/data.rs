use polars::df;
use polars::prelude::DataFrame;
use rstest::fixture;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) static STATS_CSV: &str = "\
name,team,age,nation,position,minutes,goals
Alice,TeamA,22,USA,FW,900,7
Bob,TeamB,30,ENG,MF,0,0
Carl,TeamC,27,FRA,DF,1800,1
";

pub(crate) static SALARIES_CSV: &str = "\
Player,Annual,Club
Alice,900000,TeamA
Bob,1200000,TeamB
Dora,50000,TeamD
";

pub(crate) fn write_file(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write test data");
    path
}

/// Writes `stats.csv` and `sal.csv` into `dir`.
pub(crate) fn write_datasets(dir: &Path) {
    write_file(dir, "stats.csv", STATS_CSV);
    write_file(dir, "sal.csv", SALARIES_CSV);
}

#[fixture]
pub(crate) fn player_stats() -> DataFrame {
    df!(
        "name" => ["Alice", "Bob", "Carl"],
        "team" => ["TeamA", "TeamB", "TeamC"],
        "age" => [22i64, 30, 27],
        "nation" => ["USA", "ENG", "FRA"],
        "position" => ["FW", "MF", "DF"],
        "minutes" => [900i64, 0, 1800],
    )
    .expect("Failed to build player stats")
}

#[fixture]
pub(crate) fn player_salaries() -> DataFrame {
    df!(
        "Player" => ["Alice", "Bob", "Dora"],
        "Annual" => [900000i64, 1200000, 50000],
    )
    .expect("Failed to build player salaries")
}
