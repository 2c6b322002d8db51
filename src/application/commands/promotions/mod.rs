// src/application/commands/promotions/mod.rs
mod coverage;
mod create;
mod delete;
mod service;
mod update;

pub use coverage::{AddProductsToPromotionCommand, RemoveProductsFromPromotionCommand};
pub use create::CreatePromotionCommand;
pub use delete::DeletePromotionCommand;
pub use service::PromotionCommandService;
pub use update::UpdatePromotionCommand;
