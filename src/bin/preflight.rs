use food_marketplace::storage::postgres;
use food_marketplace::Config;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-schema]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           BIND_ADDR, DB_MAX_CONNECTIONS, RESTAURANT_ID_RULE\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let create_schema = args.iter().any(|a| a == "--create-schema");

    // Force-read config (nice error messages if missing)
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);
    println!("  RESTAURANT_ID_RULE={}", config.restaurant_id_rule);

    // Basic DB connectivity
    let pool = postgres::connect(&config).await?;
    let version: String = sqlx::query_scalar("SELECT version()").fetch_one(&pool).await?;
    println!("  Postgres: {}", version);

    let missing = postgres::missing_tables(&pool).await?;
    if missing.is_empty() {
        println!("  Tables present: categories, items");
    } else if create_schema {
        println!("  Missing tables {:?} -> creating schema...", missing);
        postgres::ensure_schema(&pool).await?;
        let still_missing = postgres::missing_tables(&pool).await?;
        if !still_missing.is_empty() {
            return Err(anyhow::anyhow!(
                "Tables still missing after schema creation: {:?}",
                still_missing
            ));
        }
        println!("  Schema created successfully.");
    } else {
        return Err(anyhow::anyhow!(
            "Missing tables {:?}. Re-run with --create-schema or start api_server once",
            missing
        ));
    }

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await?;
    if categories == 0 {
        eprintln!("  Warning: categories table is empty; item creation will fail the cat_id foreign key.");
    } else {
        println!("  Categories: {}", categories);
    }

    println!("> Preflight OK.");
    Ok(())
}
