pub mod category;
pub mod errors;
pub mod menu;
pub mod product;
pub mod promotion;
