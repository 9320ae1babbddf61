pub mod config;
pub mod extract;
pub mod load;
pub use pipeline::{Pipeline, player_salary_on_play_time};
pub mod constants;
pub mod error;
pub mod pipeline;
#[cfg(test)]
mod test_suite;

pub mod transform;
mod validation;
