pub mod categories;
pub mod menu;
pub mod products;
pub mod promotions;

pub use categories::CategoryDto;
pub use menu::{MenuCategoryDto, MenuDto, MenuItemDto, MenuPromotionDto};
pub use products::ProductDto;
pub use promotions::{PromotionDto, TimeRangeDto};
