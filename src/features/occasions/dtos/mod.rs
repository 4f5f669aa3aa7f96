mod occasion_dto;

pub use occasion_dto::OccasionResponseDto;
