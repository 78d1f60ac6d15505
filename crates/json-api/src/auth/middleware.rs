//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{auth::auth_status_error, extensions::*, state::State};

/// Authorization schemes accepted in front of an API token.
const TOKEN_SCHEMES: [&str; 2] = ["bearer", "token"];

/// Resolve the request's API token to an account, or stop with 401.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_token(req) else {
        res.render(
            StatusError::unauthorized().brief("Authentication credentials were not provided."),
        );
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => depot.insert_identity(user),
        Err(error) => {
            res.render(auth_status_error(error));
            ctrl.skip_rest();

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if token.is_empty()
        || !TOKEN_SCHEMES
            .iter()
            .any(|accepted| scheme.eq_ignore_ascii_case(accepted))
    {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_app::auth::AuthServiceError;

    use crate::test_helpers::{TestServices, buyer};

    use super::*;

    #[salvo::handler]
    async fn echo_username(depot: &mut Depot, res: &mut Response) {
        let username = depot
            .identity_or_401()
            .map_or_else(|_| "missing".to_string(), |user| user.username.clone());

        res.render(username);
    }

    fn make_service(services: TestServices) -> Service {
        let router = Router::new()
            .hoop(inject(services.into_state()))
            .hoop(handler)
            .push(Router::new().get(echo_username));

        Service::new(router)
    }

    fn expect_token(services: &mut TestServices, expected: &'static str) {
        services
            .auth
            .expect_authenticate_bearer()
            .once()
            .withf(move |token| token == expected)
            .return_once(|_| Ok(buyer()));
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_basic_authorization_header_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_bearer_token_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services.auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer    ", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_returns_401() -> TestResult {
        let mut services = TestServices::default();

        services
            .auth
            .expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_token_injects_identity() -> TestResult {
        let mut services = TestServices::default();

        expect_token(&mut services, "abc123");

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, buyer().username);

        Ok(())
    }

    #[tokio::test]
    async fn test_token_scheme_is_accepted() -> TestResult {
        let mut services = TestServices::default();

        expect_token(&mut services, "abc123");

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Token abc123", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, buyer().username);

        Ok(())
    }
}
