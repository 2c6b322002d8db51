// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod menu;
pub mod products;
pub mod promotions;
