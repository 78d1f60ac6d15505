//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    orders::{
        details::{AdminOrderDetails, OrderDetails},
        records::{OrderRecord, OrderStatus, OrderUuid},
    },
    products::records::{ProductRecord, ProductUuid},
    users::records::{UserRecord, UserUuid},
};

const FIND_PRODUCT_FOR_ORDER_SQL: &str = include_str!("sql/find_product_for_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const LIST_ORDERS_FOR_USER_SQL: &str = include_str!("sql/list_orders_for_user.sql");
const GET_ORDER_FOR_USER_SQL: &str = include_str!("sql/get_order_for_user.sql");
const LIST_ALL_ORDERS_SQL: &str = include_str!("sql/list_all_orders.sql");

/// Order row ready for insertion.
#[derive(Debug, Clone)]
pub(crate) struct NewOrderRecord {
    pub(crate) uuid: OrderUuid,
    pub(crate) user_uuid: UserUuid,
    pub(crate) product_uuid: ProductUuid,
    pub(crate) card_last_four: String,
    pub(crate) status: OrderStatus,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the product an order will reference, holding a share lock on it
    /// until the transaction ends.
    pub(crate) async fn find_product_for_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_FOR_ORDER_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrderRecord,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(order.product_uuid.into_uuid())
            .bind(order.card_last_four)
            .bind(order.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Orders owned by `user`, newest first.
    pub(crate) async fn list_orders_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderDetails>, sqlx::Error> {
        query_as::<Postgres, OrderDetails>(LIST_ORDERS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// One order owned by `user`; [`sqlx::Error::RowNotFound`] when it is
    /// missing or belongs to someone else.
    pub(crate) async fn get_order_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, sqlx::Error> {
        query_as::<Postgres, OrderDetails>(GET_ORDER_FOR_USER_SQL)
            .bind(order.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Every order across all owners, newest first.
    pub(crate) async fn list_all_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<AdminOrderDetails>, sqlx::Error> {
        query_as::<Postgres, AdminOrderDetails>(LIST_ALL_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

fn decode_status(row: &PgRow) -> sqlx::Result<OrderStatus> {
    row.try_get::<String, _>("status")?
        .parse()
        .map_err(|error| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(error),
        })
}

fn joined_product(row: &PgRow) -> sqlx::Result<ProductRecord> {
    Ok(ProductRecord {
        uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
        name: row.try_get("product_name")?,
        description: row.try_get("product_description")?,
        price: row.try_get("product_price")?,
        image_url: row.try_get("product_image_url")?,
        created_at: row
            .try_get::<SqlxTimestamp, _>("product_created_at")?
            .to_jiff(),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            card_last_four: row.try_get("card_last_four")?,
            status: decode_status(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderDetails {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order: OrderRecord::from_row(row)?,
            product: joined_product(row)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AdminOrderDetails {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let order = OrderRecord::from_row(row)?;

        let owner = UserRecord {
            uuid: order.user_uuid,
            username: row.try_get("owner_username")?,
            email: row.try_get("owner_email")?,
            is_staff: row.try_get("owner_is_staff")?,
            created_at: row
                .try_get::<SqlxTimestamp, _>("owner_created_at")?
                .to_jiff(),
        };

        Ok(Self {
            product: joined_product(row)?,
            owner,
            order,
        })
    }
}
