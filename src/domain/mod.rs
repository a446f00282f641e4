// Domain layer - dashboard data and the pure filtering/sorting engine
pub mod dashboard;
pub mod format;
pub mod metrics;
pub mod pages;
pub mod range;
