use clap::{Parser, ValueEnum};
use db_infra::config::db::{DbKind, RuntimeEnv};
use db_infra::orchestrate_migration;
use migration::MigrationCommand;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "League database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type (in-memory SQLite is pointless for a one-shot CLI)
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,db_infra=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };

    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    if let Err(e) = orchestrate_migration(env, db_kind, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
