pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::Promotion;
pub use repository::PromotionRepository;
pub use specifications::PromotionEligibilitySpec;
pub use value_objects::{Discount, PromotionId, TimeOfDay, TimeWindow, Weekday};
