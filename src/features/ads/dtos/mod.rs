mod ad_dto;

pub use ad_dto::{AdResponseDto, CreateAdDto, UpdateAdDto};
