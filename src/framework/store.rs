//! # Store Actor
//!
//! The server half of a store: it owns the entities of one resource type and processes
//! [`StoreRequest`]s one at a time in its own Tokio task.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns a collection of entities and serializes every mutation through its request loop.
///
/// Each store processes its own messages sequentially, so `entries` needs no `Mutex`.
/// Entries keep insertion order, which is the order `List` returns them in (menu display order,
/// order placement order).
///
/// ## Operations
///
/// * **Create**: mint the next id, `from_create_params`, `on_create`, insert, reply with the id.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: clones of every entity whose [`StoreEntity::matches`] accepts the query.
/// * **Update**: `on_update` in place, reply with the new state.
/// * **Delete**: `on_delete`, then remove.
/// * **Action**: `handle_action` in place, reply with its result.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: IndexMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a store and the client that talks to it.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            entries: IndexMap::new(),
            next_id: 1,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create rejected");
                                let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                                continue;
                            }
                            self.next_id += 1;
                            self.entries.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.entries.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.entries.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .entries
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, hits = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.entries.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks work on a copy so a rejected update leaves the stored entity intact.
                    let mut draft = item.clone();
                    match draft.on_update(update, &context).await {
                        Ok(()) => {
                            *item = draft.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update rejected");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.entries.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "Delete rejected");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    self.entries.shift_remove(&id);
                    info!(entity_type, %id, size = self.entries.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.entries.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| StoreError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u32,
        station: String,
        fired: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        station: String,
    }

    #[derive(Debug)]
    struct TicketUpdate {
        station: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Fire,
    }

    #[derive(Debug)]
    struct StationQuery(Option<String>);

    #[derive(Debug, PartialEq, thiserror::Error)]
    enum TicketError {
        #[error("station must not be blank")]
        BlankStation,
        #[error("fired tickets are kept for the shift")]
        Fired,
    }

    #[async_trait]
    impl StoreEntity for Ticket {
        type Id = u32;
        type Create = TicketCreate;
        type Update = TicketUpdate;
        type Action = TicketAction;
        type ActionResult = bool;
        type Query = StationQuery;
        type Context = ();
        type Error = TicketError;

        fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, TicketError> {
            if params.station.trim().is_empty() {
                return Err(TicketError::BlankStation);
            }
            Ok(Self {
                id,
                station: params.station,
                fired: false,
            })
        }

        fn matches(&self, query: &StationQuery) -> bool {
            query.0.as_ref().map_or(true, |s| *s == self.station)
        }

        async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), TicketError> {
            self.station = update.station;
            if self.station.is_empty() {
                return Err(TicketError::BlankStation);
            }
            Ok(())
        }

        async fn on_delete(&self, _: &()) -> Result<(), TicketError> {
            if self.fired {
                Err(TicketError::Fired)
            } else {
                Ok(())
            }
        }

        async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<bool, TicketError> {
            match action {
                TicketAction::Fire => {
                    let changed = !self.fired;
                    self.fired = true;
                    Ok(changed)
                }
            }
        }
    }

    fn create(station: &str) -> TicketCreate {
        TicketCreate {
            station: station.into(),
        }
    }

    #[tokio::test]
    async fn test_store_lifecycle() {
        let (store, client) = StoreActor::<Ticket>::new(8);
        tokio::spawn(store.run(()));

        let grill = client.create(create("grill")).await.unwrap();
        let fryer = client.create(create("fryer")).await.unwrap();
        assert_eq!((grill, fryer), (1, 2));

        assert!(client.perform_action(grill, TicketAction::Fire).await.unwrap());
        assert!(!client.perform_action(grill, TicketAction::Fire).await.unwrap());

        let all = client.list(StationQuery(None)).await.unwrap();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        let only_fryer = client.list(StationQuery(Some("fryer".into()))).await.unwrap();
        assert_eq!(only_fryer.len(), 1);

        let err = client.delete(grill).await.unwrap_err();
        assert_eq!(err.into_entity::<TicketError>().unwrap(), TicketError::Fired);

        client.delete(fryer).await.unwrap();
        assert!(client.get(fryer).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_an_id() {
        let (store, client) = StoreActor::<Ticket>::new(8);
        tokio::spawn(store.run(()));

        assert!(client.create(create("  ")).await.is_err());
        assert_eq!(client.create(create("pass")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_previous_state() {
        let (store, client) = StoreActor::<Ticket>::new(8);
        tokio::spawn(store.run(()));

        let id = client.create(create("grill")).await.unwrap();
        let result = client
            .update(id, TicketUpdate { station: String::new() })
            .await;
        assert!(result.is_err());

        let ticket = client.get(id).await.unwrap().unwrap();
        assert_eq!(ticket.station, "grill");
    }

    #[tokio::test]
    async fn test_missing_entity_reports_not_found() {
        let (store, client) = StoreActor::<Ticket>::new(8);
        tokio::spawn(store.run(()));

        let err = client.perform_action(42, TicketAction::Fire).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "42"));
    }
}
