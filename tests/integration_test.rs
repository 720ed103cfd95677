use dine_right::clients::SessionClient;
use dine_right::config::AppConfig;
use dine_right::conflict_check::mock::ScriptedModel;
use dine_right::conflict_check::FALLBACK_MESSAGE;
use dine_right::framework::StoreHandle;
use dine_right::lifecycle::{CheckoutError, DiningSystem, ItemSales};
use dine_right::model::{
    CartFlow, CustomizationOptions, MenuFilter, MenuItem, OrderFilter, OrderStatus, SessionId,
};
use dine_right::session_actor::SessionError;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

async fn seeded(model: ScriptedModel) -> DiningSystem {
    let system = DiningSystem::new(&AppConfig::default(), Arc::new(model));
    system.seed_menu().await.expect("Failed to seed menu");
    system
}

async fn dish(system: &DiningSystem, name: &str) -> MenuItem {
    system
        .browse(MenuFilter::new("All", name))
        .await
        .expect("Failed to browse")
        .into_iter()
        .find(|item| item.name == name)
        .expect("Dish not on the menu")
}

async fn add(
    sessions: &SessionClient,
    session: SessionId,
    item: MenuItem,
    customization: CustomizationOptions,
    quantity: u32,
) {
    sessions.select_item(session, item).await.unwrap();
    sessions
        .confirm_customization(session, customization, quantity)
        .await
        .unwrap()
        .expect("Item was not added");
}

/// Full checkout through every store, with the model flagging the peanut allergy.
#[tokio::test]
async fn test_pad_thai_with_peanut_allergy_is_flagged() {
    let model = ScriptedModel::new().verdict(
        false,
        "Our Pad Thai is topped with crushed peanuts.",
        "ALLERGY: PEANUT - NO PEANUTS, CHECK SAUCE",
    );
    let system = seeded(model).await;
    let sessions = &system.session_client;

    let session = sessions.check_in("7", "Ana").await.unwrap();
    let pad_thai = dish(&system, "Pad Thai").await;
    assert!(pad_thai.has_tag("peanuts"));

    let allergy = CustomizationOptions::default().with_allergy("peanut allergy");
    add(sessions, session, pad_thai, allergy, 2).await;

    let snapshot = sessions.cart(session).await.unwrap();
    let order_id = system.place_order(session).await.unwrap();

    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.items, snapshot.items);
    assert_eq!(order.table_number, "7");
    assert_eq!(order.customer_name.as_deref(), Some("Ana"));
    assert_eq!(order.status, OrderStatus::Pending);

    let verdict = order.analysis_for(snapshot.items[0].cart_id).unwrap();
    assert!(!verdict.safe);
    assert_eq!(verdict.kitchen_ticket_summary, "ALLERGY: PEANUT - NO PEANUTS, CHECK SAUCE");

    // Placed lines leave the cart.
    assert!(sessions.cart(session).await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_model_still_places_the_order() {
    let system = seeded(ScriptedModel::new().fail("connection refused")).await;
    let sessions = &system.session_client;

    let session = sessions.check_in("3", "").await.unwrap();
    let notes = CustomizationOptions::default()
        .with_allergy("peanut allergy")
        .with_request("extra lime");
    add(sessions, session, dish(&system, "Pad Thai").await, notes, 1).await;
    add(
        sessions,
        session,
        dish(&system, "Thai Iced Tea").await,
        CustomizationOptions::default(),
        2,
    )
    .await;

    let order_id = system.place_order(session).await.unwrap();
    let order = system.order_client.get(order_id).await.unwrap().unwrap();

    assert_eq!(order.customer_name, None);
    let analysis = order.analysis.as_ref().unwrap();
    assert_eq!(analysis.len(), 2);
    for verdict in analysis.values() {
        assert!(verdict.safe);
        assert_eq!(verdict.message, FALLBACK_MESSAGE);
    }
    let first = order.analysis_for(order.items[0].cart_id).unwrap();
    assert!(first.kitchen_ticket_summary.contains("peanut allergy"));
    assert!(first.kitchen_ticket_summary.contains("extra lime"));
}

#[tokio::test]
async fn test_empty_cart_cannot_be_placed() {
    let system = seeded(ScriptedModel::new()).await;
    let session = system.session_client.check_in("1", "Ben").await.unwrap();

    assert_eq!(
        system.place_order(session).await.unwrap_err(),
        CheckoutError::EmptyCart
    );
    assert_eq!(system.pending_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_log_out_discards_session_and_cart() {
    let system = seeded(ScriptedModel::new()).await;
    let sessions = &system.session_client;

    let session = sessions.check_in("9", "Chen").await.unwrap();
    add(
        sessions,
        session,
        dish(&system, "Green Curry").await,
        CustomizationOptions::default(),
        1,
    )
    .await;
    sessions.select_item(session, dish(&system, "Beef Pho").await).await.unwrap();

    sessions.log_out(session).await.unwrap();

    assert!(sessions.get(session).await.unwrap().is_none());
    assert!(matches!(
        sessions.cart(session).await,
        Err(SessionError::NotFound(_))
    ));
    assert!(matches!(
        system.place_order(session).await,
        Err(CheckoutError::Session(SessionError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_customization_flow() {
    let system = seeded(ScriptedModel::new()).await;
    let sessions = &system.session_client;
    let session = sessions.check_in("4", "Dara").await.unwrap();

    // Nothing selected: confirm is ignored.
    let ignored = sessions
        .confirm_customization(session, CustomizationOptions::default(), 1)
        .await
        .unwrap();
    assert_eq!(ignored, None);

    let satay = dish(&system, "Chicken Satay").await;
    let flow = sessions.select_item(session, satay.clone()).await.unwrap();
    assert_eq!(flow, CartFlow::Customizing(satay));
    assert_eq!(
        sessions.dismiss_selection(session).await.unwrap(),
        CartFlow::Browsing
    );
    assert!(sessions.cart(session).await.unwrap().is_empty());

    assert_eq!(sessions.open_cart(session).await.unwrap(), CartFlow::CartOpen);
    assert_eq!(sessions.close_cart(session).await.unwrap(), CartFlow::Browsing);
}

#[tokio::test]
async fn test_kitchen_completes_orders_once() {
    let system = seeded(ScriptedModel::new()).await;
    let sessions = &system.session_client;

    let mut placed = Vec::new();
    for table in ["1", "2"] {
        let session = sessions.check_in(table, "").await.unwrap();
        add(
            sessions,
            session,
            dish(&system, "Mango Sticky Rice").await,
            CustomizationOptions::default(),
            1,
        )
        .await;
        placed.push(system.place_order(session).await.unwrap());
    }

    let queue = system.kitchen_queue().await.unwrap();
    assert_eq!(queue.iter().map(|o| o.id).collect::<Vec<_>>(), placed);

    assert!(system.complete_order(placed[0]).await.unwrap());
    assert!(!system.complete_order(placed[0]).await.unwrap());

    let order = system.order_client.get(placed[0]).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(system.pending_count().await.unwrap(), 1);
    assert_eq!(
        system.order_client.list(OrderFilter::completed()).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_sales_summary() {
    let system = seeded(ScriptedModel::new()).await;
    let sessions = &system.session_client;
    let session = sessions.check_in("5", "Eli").await.unwrap();

    let tea = dish(&system, "Thai Iced Tea").await;
    let pho = dish(&system, "Beef Pho").await;
    let rolls = dish(&system, "Fresh Spring Rolls").await;
    let expected_revenue = tea.price * 3.0 + pho.price * 3.0 + rolls.price;

    add(sessions, session, tea, CustomizationOptions::default(), 3).await;
    add(sessions, session, pho, CustomizationOptions::default(), 3).await;
    add(sessions, session, rolls, CustomizationOptions::default(), 1).await;
    let order_id = system.place_order(session).await.unwrap();
    system.complete_order(order_id).await.unwrap();

    let summary = system.sales_summary().await.unwrap();
    assert_eq!(summary.total_orders, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.pending, 0);
    assert!((summary.revenue - expected_revenue).abs() < 1e-9);
    assert_eq!(
        summary.top_items,
        vec![
            ItemSales { name: "Beef Pho".into(), quantity: 3 },
            ItemSales { name: "Thai Iced Tea".into(), quantity: 3 },
            ItemSales { name: "Fresh Spring Rolls".into(), quantity: 1 },
        ]
    );
}

#[tokio::test]
async fn test_concurrent_checkouts_place_one_order() {
    let system = seeded(ScriptedModel::new().with_delay(Duration::from_millis(200))).await;
    let sessions = &system.session_client;

    let session = sessions.check_in("6", "Fay").await.unwrap();
    let notes = CustomizationOptions::default().with_allergy("peanut allergy");
    add(sessions, session, dish(&system, "Pad Thai").await, notes, 1).await;

    let (first, second) = tokio::join!(system.place_order(session), system.place_order(session));
    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    let refused = if first.is_ok() { second } else { first };
    assert!(matches!(
        refused,
        Err(CheckoutError::Session(SessionError::CheckoutInProgress(_)))
    ));

    assert_eq!(system.order_client.list(OrderFilter::all()).await.unwrap().len(), 1);
    let cart = sessions.cart(session).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(sessions.get(session).await.unwrap().unwrap().flow, CartFlow::Browsing);
}

#[tokio::test]
async fn test_log_out_during_checkout_keeps_the_order() {
    let system = seeded(ScriptedModel::new().with_delay(Duration::from_millis(200))).await;
    let sessions = &system.session_client;

    let session = sessions.check_in("8", "Gus").await.unwrap();
    add(
        sessions,
        session,
        dish(&system, "Green Curry").await,
        CustomizationOptions::default(),
        1,
    )
    .await;

    let (placed, logged_out) = tokio::join!(system.place_order(session), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        sessions.log_out(session).await
    });
    logged_out.unwrap();
    let order_id = placed.unwrap();

    let queue = system.kitchen_queue().await.unwrap();
    assert_eq!(queue.iter().map(|o| o.id).collect::<Vec<_>>(), vec![order_id]);
    assert!(sessions.get(session).await.unwrap().is_none());
}
