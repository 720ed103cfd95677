use super::error::{CheckoutError, SeedError};
use crate::clients::{MenuClient, OrderClient, SessionClient};
use crate::config::AppConfig;
use crate::conflict_check::{ConflictChecker, GeminiModel, GenerativeModel};
use crate::framework::StoreHandle;
use crate::menu_actor::{seed_menu, MenuError};
use crate::model::{
    CartItemId, CustomizationOptions, MenuFilter, MenuItem, MenuItemId, Order, OrderCreate,
    OrderFilter, OrderId, OrderItem, SessionId, SpiceLevel,
};
use crate::order_actor::OrderError;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::sync::Arc;
use crate::session_actor::SessionError;
use tracing::{error, info, instrument, warn};

/// Starts the three stores, wires the conflict checker in, and serves the customer, kitchen
/// and admin views on top of them.
///
/// # Example
///
/// ```ignore
/// let system = DiningSystem::start(&AppConfig::load());
/// system.seed_menu().await?;
///
/// let session = system.session_client.check_in("12", "Ana").await?;
/// system.session_client.select_item(session, pad_thai).await?;
/// system.session_client.confirm_customization(session, options, 1).await?;
/// let order_id = system.place_order(session).await?;
///
/// system.complete_order(order_id).await?;
/// system.shutdown().await?;
/// ```
pub struct DiningSystem {
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub session_client: SessionClient,
    checker: ConflictChecker,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Admin dashboard figures over every recorded order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_orders: usize,
    pub pending: usize,
    pub completed: usize,
    pub revenue: f64,
    /// Best sellers by quantity, ties broken by name.
    pub top_items: Vec<ItemSales>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemSales {
    pub name: String,
    pub quantity: u32,
}

const TOP_ITEMS: usize = 5;

const HISTORY_GUESTS: [&str; 6] = ["Ana", "Ben", "Chen", "Dara", "Eli", ""];
const HISTORY_REQUESTS: [&str; 4] = ["", "no cilantro", "extra lime", "sauce on the side"];
const HISTORY_ALLERGIES: [&str; 4] = ["", "", "shellfish", "gluten intolerance"];

impl DiningSystem {
    /// Spawns the stores with the given model behind the conflict checker.
    pub fn new(config: &AppConfig, model: Arc<dyn GenerativeModel>) -> Self {
        let (menu_store, menu_client) = crate::menu_actor::new(config.store_buffer);
        let (order_store, order_client) = crate::order_actor::new(config.store_buffer);
        let (session_store, session_client) = crate::session_actor::new(config.store_buffer);

        let handles = vec![
            tokio::spawn(menu_store.run(())),
            tokio::spawn(order_store.run(())),
            tokio::spawn(session_store.run(())),
        ];

        Self {
            menu_client,
            order_client,
            session_client,
            checker: ConflictChecker::new(model),
            handles,
        }
    }

    /// Spawns the stores with conflict checks going to Gemini.
    pub fn start(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(GeminiModel::new(config)))
    }

    /// Loads the opening catalog.
    pub async fn seed_menu(&self) -> Result<Vec<MenuItemId>, MenuError> {
        let mut ids = Vec::new();
        for item in seed_menu() {
            ids.push(self.menu_client.add_item(item).await?);
        }
        info!(items = ids.len(), "Menu seeded");
        Ok(ids)
    }

    pub async fn browse(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, MenuError> {
        self.menu_client.browse(filter).await
    }

    /// Turns the session's cart into a pending order.
    ///
    /// The cart is locked for the duration, so a second checkout on the same session is refused
    /// with [`SessionError::CheckoutInProgress`]. Every line is conflict-checked first,
    /// concurrently; the order is only recorded once all checks have resolved. On success the
    /// placed lines leave the cart. If the customer logged out meanwhile, the order still stands.
    #[instrument(skip(self))]
    pub async fn place_order(&self, session: SessionId) -> Result<OrderId, CheckoutError> {
        let cart = self.session_client.begin_checkout(session).await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        info!(lines = cart.items.len(), "Checking cart for conflicts");
        let analysis = self.checker.analyze_cart(&cart.items).await;

        let placed: Vec<CartItemId> = cart.items.iter().map(|line| line.cart_id).collect();
        let created = self
            .order_client
            .create_order(OrderCreate {
                table_number: cart.customer.table_number,
                customer_name: Some(cart.customer.customer_name),
                items: cart.items,
                analysis: Some(analysis),
                placed_at: Utc::now(),
            })
            .await;
        let order_id = match created {
            Ok(id) => id,
            Err(e) => {
                if let Err(release) = self.session_client.abort_checkout(session).await {
                    warn!(error = %release, "Could not unlock cart after failed checkout");
                }
                return Err(e.into());
            }
        };

        // The order is recorded from here on; settling only tidies the cart.
        match self.session_client.settle(session, placed).await {
            Ok(_) => {}
            Err(SessionError::NotFound(_)) => {
                warn!(order = %order_id, "Session ended during checkout, cart already discarded");
            }
            Err(e) => warn!(order = %order_id, error = %e, "Order placed but cart not settled"),
        }
        info!(order = %order_id, "Order placed");
        Ok(order_id)
    }

    /// Pending orders, oldest first.
    pub async fn kitchen_queue(&self) -> Result<Vec<Order>, OrderError> {
        let mut queue = self.order_client.pending().await?;
        queue.sort_by_key(|order| order.placed_at);
        Ok(queue)
    }

    pub async fn pending_count(&self) -> Result<usize, OrderError> {
        Ok(self.order_client.pending().await?.len())
    }

    pub async fn complete_order(&self, id: OrderId) -> Result<bool, OrderError> {
        self.order_client.complete_order(id).await
    }

    pub async fn sales_summary(&self) -> Result<SalesSummary, OrderError> {
        let orders = self.order_client.list(OrderFilter::all()).await?;

        let mut by_name: BTreeMap<&str, u32> = BTreeMap::new();
        for line in orders.iter().flat_map(|order| &order.items) {
            *by_name.entry(line.menu_item.name.as_str()).or_default() += line.quantity;
        }
        let mut top_items: Vec<ItemSales> = by_name
            .into_iter()
            .map(|(name, quantity)| ItemSales {
                name: name.to_string(),
                quantity,
            })
            .collect();
        // Stable sort keeps the name order from the BTreeMap for equal quantities.
        top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_items.truncate(TOP_ITEMS);

        let pending = orders.iter().filter(|order| order.is_pending()).count();
        Ok(SalesSummary {
            total_orders: orders.len(),
            pending,
            completed: orders.len() - pending,
            revenue: orders.iter().map(Order::total).sum(),
            top_items,
        })
    }

    /// Records `count` completed orders drawn at random from the current menu. The same seed
    /// gives the same orders.
    #[instrument(skip(self))]
    pub async fn seed_order_history(&self, count: usize, seed: u64) -> Result<Vec<OrderId>, SeedError> {
        let menu = self.browse(MenuFilter::default()).await?;
        if menu.is_empty() {
            return Err(SeedError::EmptyMenu);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc::now();
        let mut ids = Vec::with_capacity(count);

        for n in 0..count {
            let lines = rng.random_range(1..=3u32);
            let items = (1..=lines)
                .map(|cart_id| OrderItem {
                    cart_id: CartItemId(cart_id),
                    menu_item: menu[rng.random_range(0..menu.len())].clone(),
                    customization: random_customization(&mut rng),
                    quantity: rng.random_range(1..=3),
                })
                .collect();

            let minutes_ago = (count - n) as i64 * 45 + rng.random_range(0..30);
            let order = OrderCreate {
                table_number: rng.random_range(1..=20u32).to_string(),
                customer_name: Some(pick(&mut rng, &HISTORY_GUESTS).to_string()),
                items,
                analysis: None,
                placed_at: now - Duration::minutes(minutes_ago),
            };

            let id = self.order_client.create_order(order).await?;
            self.order_client.complete_order(id).await?;
            ids.push(id);
        }

        info!(orders = ids.len(), "Order history seeded");
        Ok(ids)
    }

    /// Closes every store and waits for their tasks to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Stores exit their loops once the last client is gone.
        drop(self.menu_client);
        drop(self.order_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn pick<'a>(rng: &mut StdRng, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

fn random_customization(rng: &mut StdRng) -> CustomizationOptions {
    CustomizationOptions {
        low_salt: rng.random_bool(0.2),
        low_sugar: rng.random_bool(0.1),
        low_oil: rng.random_bool(0.15),
        spice_level: SpiceLevel::ALL[rng.random_range(0..SpiceLevel::ALL.len())],
        allergy_notes: pick(rng, &HISTORY_ALLERGIES).to_string(),
        special_requests: pick(rng, &HISTORY_REQUESTS).to_string(),
    }
}
