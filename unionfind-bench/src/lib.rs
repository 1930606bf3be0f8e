pub mod experiment;
pub mod report;
pub mod results;
pub mod workload;
