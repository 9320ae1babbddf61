pub mod error;
pub mod salary_report;
pub use salary_report::build_salary_report;
