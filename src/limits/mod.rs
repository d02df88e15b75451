pub mod limits_model;
pub mod limits_service;
pub mod limits_traits;

pub use limits_model::{ActivityLevel, LimitFlags, PersonalAttributes, PersonalLimits, Sex};
pub use limits_service::PersonalLimitsService;
pub use limits_traits::PersonalLimitsServiceTrait;
