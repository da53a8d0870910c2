//! Wage rate configuration for the timecard engine.
//!
//! Every wage parameter is an explicit configuration value threaded
//! through the calculation calls, never a module-level constant: observed
//! deployments vary the hourly rate and overtime duration, and tests need
//! to inject their own numbers.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default/rates.yaml").unwrap();
//! println!("Hourly rate: {}", loader.config().hourly_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateConfig, SaturdayTier, WeekdayOvertime};
