pub mod categories;
pub mod menu;
pub mod products;
pub mod promotions;

pub use categories::CategoryQueryService;
pub use menu::{GetMenuQuery, MenuQueryService};
pub use products::ProductQueryService;
pub use promotions::PromotionQueryService;
