mod occasion_service;

pub use occasion_service::OccasionService;
