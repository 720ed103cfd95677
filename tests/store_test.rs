//! Real stores without the orchestrator: each store's rules as seen through its client.

use chrono::Utc;
use dine_right::framework::StoreHandle;
use dine_right::menu_actor::{seed_menu, MenuError};
use dine_right::model::{
    CartItemId, CustomizationOptions, MenuFilter, MenuItem, MenuItemCreate, MenuItemId,
    MenuItemUpdate, OrderCreate, OrderFilter, OrderItem, CATEGORIES,
};
use dine_right::order_actor::OrderError;
use dine_right::session_actor::SessionError;
use pretty_assertions::assert_eq;

async fn seeded_menu() -> (dine_right::clients::MenuClient, Vec<MenuItemId>) {
    let (store, client) = dine_right::menu_actor::new(8);
    tokio::spawn(store.run(()));
    let mut ids = Vec::new();
    for item in seed_menu() {
        ids.push(client.add_item(item).await.unwrap());
    }
    (client, ids)
}

fn line(cart_id: u32, item: &MenuItem) -> OrderItem {
    OrderItem {
        cart_id: CartItemId(cart_id),
        menu_item: item.clone(),
        customization: CustomizationOptions::default(),
        quantity: 1,
    }
}

#[tokio::test]
async fn test_all_category_with_empty_search_returns_full_catalog() {
    let (menu, ids) = seeded_menu().await;

    let everything = menu.browse(MenuFilter::new("All", "")).await.unwrap();
    assert_eq!(everything.iter().map(|i| i.id).collect::<Vec<_>>(), ids);
    assert_eq!(
        everything.iter().map(|i| i.name.clone()).collect::<Vec<_>>(),
        seed_menu().into_iter().map(|i| i.name).collect::<Vec<_>>()
    );
    assert_eq!(CATEGORIES[0], "All");
}

#[tokio::test]
async fn test_browse_by_category_and_search() {
    let (menu, _) = seeded_menu().await;

    let starters = menu.browse(MenuFilter::new("Starters", "")).await.unwrap();
    assert!(!starters.is_empty());
    assert!(starters.iter().all(|i| i.category == "Starters"));

    let peanut = menu.browse(MenuFilter::new("All", "PEANUT")).await.unwrap();
    assert!(peanut.iter().any(|i| i.name == "Pad Thai"));

    let none = menu.browse(MenuFilter::new("Drinks", "curry")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_menu_admin_edits() {
    let (menu, _) = seeded_menu().await;

    let id = menu
        .add_item(MenuItemCreate::new(
            "Tom Yum",
            "Hot and sour soup with shrimp",
            "Starters",
            &["shellfish", "spicy"],
            8.5,
        ))
        .await
        .unwrap();

    let updated = menu
        .update_item(
            id,
            MenuItemUpdate {
                price: Some(9.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 9.0);
    assert_eq!(updated.name, "Tom Yum");

    let rejected = menu
        .update_item(
            id,
            MenuItemUpdate {
                price: Some(-1.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(MenuError::Validation(_))));
    assert_eq!(menu.get(id).await.unwrap().unwrap().price, 9.0);

    menu.delete_item(id).await.unwrap();
    assert!(menu.get(id).await.unwrap().is_none());
    assert!(matches!(
        menu.delete_item(id).await,
        Err(MenuError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_orders_are_immutable_once_placed() {
    let (menu, ids) = seeded_menu().await;
    let item = menu.get(ids[0]).await.unwrap().unwrap();

    let (store, orders) = dine_right::order_actor::new(8);
    tokio::spawn(store.run(()));

    let id = orders
        .create_order(OrderCreate {
            table_number: "2".into(),
            customer_name: None,
            items: vec![line(1, &item)],
            analysis: None,
            placed_at: Utc::now(),
        })
        .await
        .unwrap();

    assert!(matches!(
        orders.update_order(id).await,
        Err(OrderError::Immutable(_))
    ));
    assert!(matches!(
        orders.delete_order(id).await,
        Err(OrderError::Immutable(_))
    ));
    assert_eq!(orders.list(OrderFilter::all()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_orders_are_rejected() {
    let (menu, ids) = seeded_menu().await;
    let item = menu.get(ids[1]).await.unwrap().unwrap();

    let (store, orders) = dine_right::order_actor::new(8);
    tokio::spawn(store.run(()));

    let empty = OrderCreate {
        table_number: "2".into(),
        customer_name: None,
        items: vec![],
        analysis: None,
        placed_at: Utc::now(),
    };
    assert!(matches!(
        orders.create_order(empty).await,
        Err(OrderError::Validation(_))
    ));

    let mut zero = line(1, &item);
    zero.quantity = 0;
    let zero_quantity = OrderCreate {
        table_number: "2".into(),
        customer_name: None,
        items: vec![zero],
        analysis: None,
        placed_at: Utc::now(),
    };
    assert!(matches!(
        orders.create_order(zero_quantity).await,
        Err(OrderError::Validation(_))
    ));

    assert!(matches!(
        orders.complete_order(dine_right::model::OrderId(99)).await,
        Err(OrderError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_session_cart_edits() {
    let (menu, ids) = seeded_menu().await;
    let (store, sessions) = dine_right::session_actor::new(8);
    tokio::spawn(store.run(()));

    assert!(matches!(
        sessions.check_in("  ", "Ana").await,
        Err(SessionError::Validation(_))
    ));

    let session = sessions.check_in("11", "Ana").await.unwrap();
    for id in &ids[..3] {
        let item = menu.get(*id).await.unwrap().unwrap();
        sessions.select_item(session, item).await.unwrap();
        sessions
            .confirm_customization(session, CustomizationOptions::default(), 1)
            .await
            .unwrap();
    }

    let item = menu.get(ids[0]).await.unwrap().unwrap();
    sessions.select_item(session, item).await.unwrap();
    assert_eq!(
        sessions
            .confirm_customization(session, CustomizationOptions::default(), 0)
            .await,
        Err(SessionError::InvalidQuantity)
    );

    assert!(sessions.remove_item(session, CartItemId(2)).await.unwrap());
    assert!(!sessions.remove_item(session, CartItemId(2)).await.unwrap());
    assert_eq!(sessions.cart(session).await.unwrap().items.len(), 2);

    let moved = sessions.move_table(session, "14").await.unwrap();
    assert_eq!(moved.customer.table_number, "14");

    assert_eq!(sessions.clear_cart(session).await.unwrap(), 2);
    assert!(sessions.cart(session).await.unwrap().is_empty());
}
