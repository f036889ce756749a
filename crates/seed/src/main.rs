//! `charforge-seed` -- populate the character store.
//!
//! Generates characters with the same core the API uses and inserts them in
//! one transaction. With `--seed`, a single character uses the seed as given
//! and larger batches use its expansion (`{seed}_0`, `{seed}_1`, ...), the
//! same rule the API applies, so re-running against an empty database
//! reproduces the batch exactly.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                          |
//! |----------------|----------|--------------------------------------|
//! | `DATABASE_URL` | yes*     | Postgres URL (*unless `--dry-run`)   |
//! | `POOLS_PATH`   | no       | JSON pool file replacing built-ins   |

use anyhow::Context;
use charforge_core::character::GenerationOptions;
use charforge_core::generator::generate_batch;
use charforge_core::pools::Pools;
use charforge_core::rng::Seed;
use charforge_db::models::character::NewCharacter;
use charforge_db::repositories::CharacterRepo;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "charforge-seed", version, about = "Populate the character store")]
struct Args {
    /// Number of characters to generate.
    #[arg(short, long, default_value_t = 25)]
    count: usize,

    /// Base seed for a reproducible batch; random when omitted.
    #[arg(short, long)]
    seed: Option<String>,

    /// Delete every stored character before inserting.
    #[arg(long)]
    reset: bool,

    /// Print the generated characters as JSON instead of storing them.
    #[arg(long)]
    dry_run: bool,

    /// Postgres connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// JSON file replacing the built-in reference pools.
    #[arg(long, env = "POOLS_PATH")]
    pools_path: Option<String>,
}

fn load_pools(path: Option<&str>) -> anyhow::Result<Pools> {
    let Some(path) = path else {
        return Ok(Pools::builtin());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Pools::from_json(&text).with_context(|| format!("parsing {path}"))
}

fn build_batch(pools: &Pools, seed: Option<&Seed>, count: usize) -> Vec<NewCharacter> {
    generate_batch(pools, seed, &GenerationOptions::default(), count)
        .into_iter()
        .map(|character| NewCharacter {
            character,
            is_custom: false,
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let pools = load_pools(args.pools_path.as_deref())?;
    let seed = args.seed.map(Seed::from);

    let inputs = build_batch(&pools, seed.as_ref(), args.count);
    tracing::info!(
        count = inputs.len(),
        seed = ?seed.as_ref().map(Seed::as_str),
        "Characters generated",
    );

    if args.dry_run {
        let characters: Vec<_> = inputs.iter().map(|input| &input.character).collect();
        println!("{}", serde_json::to_string_pretty(&characters)?);
        return Ok(());
    }

    let database_url = args
        .database_url
        .context("DATABASE_URL must be set (or pass --database-url)")?;
    let pool = charforge_db::create_pool(&database_url)
        .await
        .context("connecting to database")?;
    charforge_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    if args.reset {
        let removed = CharacterRepo::delete_all(&pool).await?;
        tracing::info!(removed, "Existing characters removed");
    }

    let stored = CharacterRepo::create_many(&pool, &inputs).await?;
    let total = CharacterRepo::count(&pool).await?;

    tracing::info!(inserted = stored.len(), total, "Seeding complete");
    Ok(())
}
