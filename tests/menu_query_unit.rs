use std::sync::Arc;

mod support;

use cardapio_core::application::queries::{GetMenuQuery, MenuQueryService};
use cardapio_core::domain::promotion::Discount;
use support::{
    FixedClock, InMemoryCategoryRepo, InMemoryPromotionRepo, InMemoryProductRepo,
    ProductBuilder, PromotionBuilder, category, fixed_now,
};

fn service(
    products: InMemoryProductRepo,
    promotions: InMemoryPromotionRepo,
    categories: InMemoryCategoryRepo,
) -> MenuQueryService {
    MenuQueryService::new(
        Arc::new(products),
        Arc::new(promotions),
        Arc::new(categories),
        Arc::new(FixedClock::at_fixed_now()),
        "Menu Principal",
    )
}

#[tokio::test]
async fn empty_catalog_yields_named_empty_menu() {
    let svc = service(
        InMemoryProductRepo::empty(),
        InMemoryPromotionRepo::empty(),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    assert_eq!(menu.menu_name, "Menu Principal");
    assert!(menu.items.is_empty());
}

#[tokio::test]
async fn query_name_overrides_default() {
    let svc = service(
        InMemoryProductRepo::empty(),
        InMemoryPromotionRepo::empty(),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery {
            menu_name: Some("Almoço".into()),
        })
        .await
        .expect("get_menu failed");

    assert_eq!(menu.menu_name, "Almoço");
}

#[tokio::test]
async fn hidden_products_are_left_out_and_categories_enriched() {
    let drinks = category("Bebidas");
    let drinks_id = drinks.id;

    let visible = ProductBuilder::new("Suco").price(800).category(drinks_id).build();
    let hidden = ProductBuilder::new("Item fora do ar").hidden().build();
    let orphan = ProductBuilder::new("Combo antigo")
        .price(1500)
        .category(cardapio_core::domain::category::CategoryId::generate())
        .build();

    let svc = service(
        InMemoryProductRepo::new(vec![visible, hidden, orphan]),
        InMemoryPromotionRepo::empty(),
        InMemoryCategoryRepo::new(vec![drinks]),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    assert_eq!(menu.items.len(), 2);

    let suco = &menu.items[0];
    assert_eq!(suco.name, "Suco");
    assert_eq!(suco.price, 800);
    assert_eq!(suco.final_price, 800);
    let cat = suco.category.as_ref().expect("category missing");
    assert_eq!(cat.name, "Bebidas");

    // category id points nowhere, so the entry carries no category at all
    let combo = &menu.items[1];
    assert_eq!(combo.name, "Combo antigo");
    assert!(combo.category.is_none());
}

#[tokio::test]
async fn eligible_percentage_promotion_discounts_the_price() {
    let burger = ProductBuilder::new("X-Burger").price(1999).build();
    let burger_id = burger.id;

    let promo = PromotionBuilder::new("Segunda maluca")
        .discount(Discount::Percentage(33))
        .window("11:00", "14:00")
        .covering([burger_id])
        .build();

    let svc = service(
        InMemoryProductRepo::new(vec![burger]),
        InMemoryPromotionRepo::new(vec![promo]),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    let item = &menu.items[0];
    assert_eq!(item.price, 1999);
    assert_eq!(item.final_price, 1339);
    let applied = item.promotion.as_ref().expect("promotion missing");
    assert_eq!(applied.description, "Segunda maluca");
    assert_eq!(applied.discount_percentage, Some(33));
    assert_eq!(applied.discount_price, None);
}

#[tokio::test]
async fn earliest_created_eligible_promotion_wins() {
    let burger = ProductBuilder::new("X-Burger").price(2000).build();
    let burger_id = burger.id;

    let later = PromotionBuilder::new("Metade do preço")
        .discount(Discount::Percentage(50))
        .covering([burger_id])
        .created_at(fixed_now())
        .build();
    let earlier = PromotionBuilder::new("Dez por cento")
        .discount(Discount::Percentage(10))
        .covering([burger_id])
        .created_at(fixed_now() - chrono::Duration::days(3))
        .build();

    // stored out of order on purpose; list_active re-orders by creation time
    let svc = service(
        InMemoryProductRepo::new(vec![burger]),
        InMemoryPromotionRepo::new(vec![later, earlier]),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    let item = &menu.items[0];
    assert_eq!(item.final_price, 1800);
    assert_eq!(
        item.promotion.as_ref().map(|p| p.description.as_str()),
        Some("Dez por cento")
    );
}

#[tokio::test]
async fn lapsed_and_off_window_promotions_are_ignored() {
    let burger = ProductBuilder::new("X-Burger").price(2000).build();
    let burger_id = burger.id;

    let lapsed = PromotionBuilder::new("Acabou ontem")
        .discount(Discount::Percentage(50))
        .covering([burger_id])
        .valid_until(fixed_now() - chrono::Duration::hours(1))
        .build();
    let off_window = PromotionBuilder::new("Happy hour")
        .discount(Discount::Percentage(50))
        .window("18:00", "20:00")
        .covering([burger_id])
        .build();

    let svc = service(
        InMemoryProductRepo::new(vec![burger]),
        InMemoryPromotionRepo::new(vec![lapsed, off_window]),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    let item = &menu.items[0];
    assert_eq!(item.final_price, 2000);
    assert!(item.promotion.is_none());
}

#[tokio::test]
async fn fixed_discount_price_is_taken_verbatim() {
    let burger = ProductBuilder::new("X-Burger").price(1999).build();
    let burger_id = burger.id;

    let promo = PromotionBuilder::new("Preço fechado")
        .discount(Discount::Price(2500))
        .covering([burger_id])
        .build();

    let svc = service(
        InMemoryProductRepo::new(vec![burger]),
        InMemoryPromotionRepo::new(vec![promo]),
        InMemoryCategoryRepo::empty(),
    );

    let menu = svc
        .get_menu(GetMenuQuery { menu_name: None })
        .await
        .expect("get_menu failed");

    let item = &menu.items[0];
    assert_eq!(item.final_price, 2500);
    assert_eq!(
        item.promotion.as_ref().and_then(|p| p.discount_price),
        Some(2500)
    );
}
