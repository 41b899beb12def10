use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::client::OrderClient;
use crate::error::{OrderError, OrderResult};
use crate::models::Item;

/// Aggregates the items of every package of an order.
pub struct OrderItemsService<C: OrderClient> {
    client: Arc<C>,
}

impl<C: OrderClient + 'static> OrderItemsService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// All items of an order, package by package in upstream order.
    ///
    /// Package fetches run concurrently. The first failure fails the whole
    /// lookup; the remaining fetches are aborted and drained before the
    /// error is returned, so no partial list and no background work survive.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order_items(&self, order_id: Uuid) -> OrderResult<Vec<Item>> {
        let package_ids = self.client.fetch_order(order_id).await?;
        debug!(packages = package_ids.len(), "Fetched order");

        let mut join_set = JoinSet::new();
        for (index, package_id) in package_ids.iter().copied().enumerate() {
            let client = Arc::clone(&self.client);
            join_set.spawn(
                async move {
                    let result = client.fetch_package_items(order_id, package_id).await;
                    (index, result)
                }
                .in_current_span(),
            );
        }

        let mut slots: Vec<Option<Vec<Item>>> = vec![None; package_ids.len()];

        while let Some(joined) = join_set.join_next().await {
            let failure = match joined {
                Ok((index, Ok(items))) => {
                    slots[index] = Some(items);
                    continue;
                }
                Ok((index, Err(err))) => {
                    warn!(package_id = %package_ids[index], error = %err, "Package fetch failed");
                    err
                }
                Err(join_error) => {
                    error!(error = %join_error, "Package fetch task did not complete");
                    OrderError::CommunicationFailed
                }
            };

            cancel_remaining(&mut join_set).await;
            return Err(failure);
        }

        let items: Vec<Item> = slots.into_iter().flatten().flatten().collect();
        info!(
            packages = package_ids.len(),
            items = items.len(),
            "Aggregated order items"
        );
        Ok(items)
    }
}

async fn cancel_remaining<T: 'static>(join_set: &mut JoinSet<T>) {
    join_set.abort_all();
    while join_set.join_next().await.is_some() {}
}
