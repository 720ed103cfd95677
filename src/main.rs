//! Demo run: one table orders, the kitchen serves, the admin checks the numbers.
//!
//! Conflict checks go to Gemini when the credential variable is set, otherwise to a model with
//! no replies, so every check takes the fallback path.

use dine_right::config::AppConfig;
use dine_right::conflict_check::mock::ScriptedModel;
use dine_right::conflict_check::{GeminiModel, GenerativeModel};
use dine_right::lifecycle::tracing::setup_tracing;
use dine_right::lifecycle::DiningSystem;
use dine_right::model::{CustomizationOptions, MenuFilter, SpiceLevel};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load();
    let gemini = GeminiModel::new(&config);
    let model: Arc<dyn GenerativeModel> = if gemini.has_credential() {
        info!(model = %config.gemini_model, "Conflict checks go to Gemini");
        Arc::new(gemini)
    } else {
        warn!(var = %config.api_key_var, "No API credential, conflict checks will fall back");
        Arc::new(ScriptedModel::new())
    };

    let system = DiningSystem::new(&config, model);
    system.seed_menu().await.map_err(|e| e.to_string())?;
    system
        .seed_order_history(12, 2024)
        .await
        .map_err(|e| e.to_string())?;

    // Customer side
    let span = tracing::info_span!("table_12");
    let order_id = async {
        let session = system
            .session_client
            .check_in("12", "Ana")
            .await
            .map_err(|e| e.to_string())?;

        let noodles = system
            .browse(MenuFilter::new("Noodles", "pad"))
            .await
            .map_err(|e| e.to_string())?;
        let drinks = system
            .browse(MenuFilter::new("Drinks", ""))
            .await
            .map_err(|e| e.to_string())?;

        for (dish, customization) in noodles
            .into_iter()
            .map(|d| {
                let notes = CustomizationOptions::default()
                    .with_allergy("peanut allergy")
                    .with_spice(SpiceLevel::Medium);
                (d, notes)
            })
            .chain(drinks.into_iter().map(|d| {
                let notes = CustomizationOptions {
                    low_sugar: true,
                    ..Default::default()
                };
                (d, notes)
            }))
        {
            info!(dish = %dish.name, "Adding to cart");
            system
                .session_client
                .select_item(session, dish)
                .await
                .map_err(|e| e.to_string())?;
            system
                .session_client
                .confirm_customization(session, customization, 1)
                .await
                .map_err(|e| e.to_string())?;
        }

        let order_id = system
            .place_order(session)
            .await
            .map_err(|e| e.to_string())?;
        system
            .session_client
            .log_out(session)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(order_id)
    }
    .instrument(span)
    .await?;

    // Kitchen side
    let queue = system.kitchen_queue().await.map_err(|e| e.to_string())?;
    for order in &queue {
        for line in &order.items {
            let ticket = order
                .analysis_for(line.cart_id)
                .map(|a| a.kitchen_ticket_summary.as_str())
                .unwrap_or("");
            info!(order = %order.id, table = %order.table_number, dish = %line.menu_item.name, ticket, "Ticket");
        }
    }
    system
        .complete_order(order_id)
        .await
        .map_err(|e| e.to_string())?;

    // Admin side
    let summary = system.sales_summary().await.map_err(|e| e.to_string())?;
    info!(
        orders = summary.total_orders,
        pending = summary.pending,
        revenue = %format!("{:.2}", summary.revenue),
        "Sales summary"
    );
    for item in &summary.top_items {
        info!(dish = %item.name, sold = item.quantity, "Top seller");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
