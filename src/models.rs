pub mod filters;
pub mod report;
