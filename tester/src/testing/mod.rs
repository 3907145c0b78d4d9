//! Scenario result reporting

pub mod assertions;

pub use assertions::ScenarioResult;
