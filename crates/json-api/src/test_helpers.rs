//! Test helpers.

use std::{str::FromStr, sync::Arc};

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::{ApiTokenMetadata, ApiTokenUuid, ApiTokenVersion, IssuedApiToken, MockAuthService},
    context::AppContext,
    domain::{
        orders::{
            MockOrdersService,
            details::OrderDetails,
            records::{OrderRecord, OrderStatus, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_BUYER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));

pub(crate) fn buyer() -> UserRecord {
    UserRecord {
        uuid: TEST_BUYER_UUID,
        username: "orderuser".to_string(),
        email: "orderuser@example.com".to_string(),
        is_staff: false,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn admin() -> UserRecord {
    UserRecord {
        uuid: TEST_ADMIN_UUID,
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        is_staff: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

#[salvo::handler]
pub(crate) async fn inject_buyer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(buyer());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(admin());
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_issued_token(user: UserUuid) -> IssuedApiToken {
    IssuedApiToken {
        token: "sf_v1_token".to_string(),
        metadata: ApiTokenMetadata {
            uuid: ApiTokenUuid::new(),
            user_uuid: user,
            version: ApiTokenVersion::V1,
            created_at: Timestamp::UNIX_EPOCH,
            last_used_at: None,
            revoked_at: None,
        },
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Test Item".to_string(),
        description: "A test item".to_string(),
        price: Decimal::from_str("15.99").unwrap_or_default(),
        image_url: "/onesie.jpg".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(
    owner: UserUuid,
    product: &ProductRecord,
    status: OrderStatus,
    card_last_four: &str,
) -> OrderDetails {
    OrderDetails {
        order: OrderRecord {
            uuid: OrderUuid::new(),
            user_uuid: owner,
            product_uuid: product.uuid,
            card_last_four: card_last_four.to_string(),
            status,
            created_at: Timestamp::UNIX_EPOCH,
        },
        product: product.clone(),
    }
}

/// Service mocks; any call without an explicit expectation fails the test.
pub(crate) struct TestServices {
    pub(crate) products: MockProductsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) users: MockUsersService,
    pub(crate) auth: MockAuthService,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            products: MockProductsService::new(),
            orders: MockOrdersService::new(),
            users: MockUsersService::new(),
            auth: MockAuthService::new(),
        }
    }
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            orders: Arc::new(self.orders),
            users: Arc::new(self.users),
            auth: Arc::new(self.auth),
        })
    }

    /// Serve `route` without any authenticated identity.
    pub(crate) fn anonymous(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as a regular, non-staff account.
    pub(crate) fn as_buyer(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_buyer)
                .push(route),
        )
    }

    /// Serve `route` as a staff account.
    pub(crate) fn as_admin(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_admin)
                .push(route),
        )
    }
}
