use clap::Args;
use rust_decimal::Decimal;
use storefront_app::domain::products::{
    PgProductsService, ProductsService, data::NewProduct, records::ProductUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product display name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Unit price, e.g. `15.99`
    #[arg(long)]
    price: Decimal,

    /// Image path or URL
    #[arg(long, default_value = "")]
    image_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(super::super::connect(&args.database_url).await?);

    let uuid = args
        .product_uuid
        .map_or_else(ProductUuid::new, ProductUuid::from_uuid);

    let product = service
        .create_product(NewProduct {
            uuid,
            name: args.name,
            description: args.description,
            price: args.price,
            image_url: args.image_url,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("product_price: {}", product.price);
    println!("product_image_url: {}", product.image_url);

    Ok(())
}
