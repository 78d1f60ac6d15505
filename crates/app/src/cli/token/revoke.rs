use clap::Args;
use storefront_app::auth::{ApiTokenUuid, PgAuthService};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Token UUID to revoke
    #[arg(long, conflicts_with = "username")]
    token_uuid: Option<Uuid>,

    /// Revoke every active token belonging to this username
    #[arg(long)]
    username: Option<String>,
}

pub(crate) async fn run(args: RevokeTokenArgs) -> Result<(), String> {
    let service = PgAuthService::new(super::super::connect(&args.database_url).await?);

    match (args.token_uuid, args.username) {
        (Some(token_uuid), _) => {
            let revoked = service
                .revoke_api_token(ApiTokenUuid::from_uuid(token_uuid))
                .await
                .map_err(|error| format!("failed to revoke token: {error}"))?;

            if revoked {
                println!("revoked token {token_uuid}");
            } else {
                println!("token {token_uuid} was not active");
            }
        }
        (None, Some(username)) => {
            let revoked = service
                .revoke_user_api_tokens(&username)
                .await
                .map_err(|error| format!("failed to revoke tokens: {error}"))?;

            println!("revoked {revoked} token(s) for {username}");
        }
        (None, None) => return Err("either --token-uuid or --username is required".to_string()),
    }

    Ok(())
}
