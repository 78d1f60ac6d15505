//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        orders::{
            card::CardNumber,
            data::NewOrder,
            details::{AdminOrderDetails, OrderDetails, PlacedOrder},
            errors::OrdersServiceError,
            payments::{self, PaymentOutcome},
            records::OrderUuid,
            repository::{NewOrderRecord, PgOrdersRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        // Returning early drops `tx`, which rolls back without writing.
        let product = self
            .repository
            .find_product_for_order(&mut tx, order.product)
            .await?
            .ok_or(OrdersServiceError::ProductNotFound)?;

        let card = CardNumber::parse(&order.card_number)
            .map_err(|_error| OrdersServiceError::InvalidCardNumber)?;

        let outcome = payments::authorize(&card);

        let record = self
            .repository
            .create_order(
                &mut tx,
                NewOrderRecord {
                    uuid: order.uuid,
                    user_uuid: user,
                    product_uuid: product.uuid,
                    card_last_four: card.last_four(),
                    status: outcome.order_status(),
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            order = %record.uuid,
            product = %record.product_uuid,
            status = %record.status,
            "order placed"
        );

        let details = OrderDetails { order: record, product };

        Ok(match outcome {
            PaymentOutcome::Approved => PlacedOrder::Paid(details),
            PaymentOutcome::Declined => PlacedOrder::Declined(details),
        })
    }

    async fn list_orders_for(&self, user: UserUuid) -> Result<Vec<OrderDetails>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order_for(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order_for_user(&mut tx, user, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_all_orders(&self) -> Result<Vec<AdminOrderDetails>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_all_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places a single-product order for `user`.
    ///
    /// The product is resolved first, then the card shape is checked, then
    /// the simulated payment runs. Declined payments still persist an order
    /// with status `failed` and are returned as [`PlacedOrder::Declined`].
    async fn place_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrdersServiceError>;

    /// Orders owned by `user`, newest first.
    async fn list_orders_for(&self, user: UserUuid) -> Result<Vec<OrderDetails>, OrdersServiceError>;

    /// One order owned by `user`. Orders belonging to other users are `NotFound`.
    async fn get_order_for(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError>;

    /// Every order across all owners, newest first.
    async fn list_all_orders(&self) -> Result<Vec<AdminOrderDetails>, OrdersServiceError>;
}
