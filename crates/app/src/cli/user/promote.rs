use clap::Args;
use storefront_app::domain::users::{PgUsersService, UsersService};

#[derive(Debug, Args)]
pub(crate) struct StaffArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Account username
    #[arg(long)]
    username: String,
}

pub(crate) async fn run(args: StaffArgs, is_staff: bool) -> Result<(), String> {
    let service = PgUsersService::new(super::super::connect(&args.database_url).await?);

    let user = service
        .set_staff(&args.username, is_staff)
        .await
        .map_err(|error| format!("failed to update user '{}': {error}", args.username))?;

    println!("user_uuid: {}", user.uuid);
    println!("username: {}", user.username);
    println!("is_staff: {}", user.is_staff);

    Ok(())
}
