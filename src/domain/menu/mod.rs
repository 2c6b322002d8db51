pub mod entity;
pub mod pricing;

pub use entity::{AppliedPromotion, AssembledMenu, CategorySummary, Menu, MenuEntry};
