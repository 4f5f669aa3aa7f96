mod occasion_handler;

pub use occasion_handler::*;
