// Library root: data model, CSV loading, configuration, and the analytics
// transforms the dashboard renders.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod important;
pub mod minute;
pub mod quarter;
pub mod record;
pub mod result;
pub mod stats;
