pub mod analysis_dto;
pub mod recruiter_dto;
