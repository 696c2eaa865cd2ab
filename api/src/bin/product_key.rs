//! Prints a product key for creating a privileged account.
//!
//! Uses the same `PRODUCT_KEY_SECRET` and `BCRYPT_COST` as the server, so
//! the first admin can be created before any admin exists to call `/key`.

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;

use realtor_api::app::build_auth_service;
use realtor_core::domain::entities::user::UserType;
use realtor_core::repositories::InMemoryUserRepository;
use realtor_shared::config::AuthConfig;

#[derive(Debug, Parser)]
#[command(name = "product-key", version, about = "Generate a product key for a SELLER or ADMIN signup")]
struct Args {
    /// Email the account will sign up with
    #[arg(long)]
    email: String,

    /// Account type the key unlocks
    #[arg(long, value_parser = parse_user_type)]
    user_type: UserType,
}

fn parse_user_type(value: &str) -> Result<UserType, String> {
    value.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if !args.user_type.is_privileged() {
        bail!("{} accounts do not need a product key", args.user_type);
    }

    // Key generation never touches the store
    let service = build_auth_service(Arc::new(InMemoryUserRepository::new()), &AuthConfig::from_env());
    let product_key = service
        .generate_product_key(&args.email, args.user_type)
        .await?;

    println!("{product_key}");
    Ok(())
}
