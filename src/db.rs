pub mod gateway;
pub use gateway::QueryGateway;
pub mod report_repo;
pub use report_repo::ReportRepository;
