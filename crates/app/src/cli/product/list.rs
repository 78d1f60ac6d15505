use clap::Args;
use storefront_app::domain::products::{PgProductsService, ProductsService};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let service = PgProductsService::new(super::super::connect(&args.database_url).await?);

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products");
        return Ok(());
    }

    for product in products {
        println!("{}\t{}\t{}", product.uuid, product.price, product.name);
    }

    Ok(())
}
