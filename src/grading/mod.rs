pub mod grading_model;
pub mod grading_service;
pub mod grading_traits;

pub use grading_model::{Grade, GradingResult, NutrientContent, NutrientZone};
pub use grading_service::ProductGradingService;
pub use grading_traits::ProductGradingServiceTrait;
