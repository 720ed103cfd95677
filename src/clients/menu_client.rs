use crate::framework::{StoreClient, StoreError, StoreHandle};
use crate::menu_actor::MenuError;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the menu store.
#[derive(Clone)]
pub struct MenuClient {
    inner: StoreClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: StoreClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn add_item(&self, item: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!(?item, "add_item called");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: MenuItemId) -> Result<(), MenuError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// Dishes matching `filter`, in menu order.
    pub async fn browse(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, MenuError> {
        self.list(filter).await
    }
}

#[async_trait]
impl StoreHandle<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &StoreClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> MenuError {
        match e {
            StoreError::NotFound(id) => MenuError::NotFound(id),
            other => other
                .into_entity::<MenuError>()
                .unwrap_or_else(|e| MenuError::Store(e.to_string())),
        }
    }
}
