//! Walkthrough of the global connection pool.
//!
//! Creates three stores, fills the pool with one handle per store, writes a
//! record through each, then requests four more handles for the first store
//! and shows which stores the recycled handles actually serve.

use clap::Parser;
use recordpool::{ConnectionPool, RecordConnection, RecordStore, StoreHandle};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recordpool-demo", version, about = "Connection pool walkthrough")]
struct Args {
    /// Log pool activity at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Extra acquires for the first store once the pool is full
    #[arg(long, default_value_t = 4)]
    reuse: usize,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn show_all(label: &str, conn: &StoreHandle) {
    let records = conn.list_all();
    if records.is_empty() {
        println!("{label}: no records in the database.");
        return;
    }
    println!("{label}: all records:");
    for record in records {
        println!("  {record}");
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let pool = ConnectionPool::global();

    let stores: Vec<Arc<RecordStore>> = (0..3).map(|_| Arc::new(RecordStore::new())).collect();
    let conns: Vec<_> = stores.iter().map(|s| pool.acquire(s)).collect();

    for (conn, (name, age)) in conns.iter().zip([("Ala", 20), ("Marek", 21), ("Kaja", 25)]) {
        conn.insert(name, age);
    }
    for (i, conn) in conns.iter().enumerate() {
        show_all(&format!("connection{}", i + 1), conn);
    }

    println!("\nObject pool check\n");

    let reused: Vec<_> = (0..args.reuse).map(|_| pool.acquire(&stores[0])).collect();
    for (i, conn) in reused.iter().enumerate() {
        let bound = stores
            .iter()
            .position(|s| conn.is_bound_to(s))
            .map(|p| format!("database{}", p + 1))
            .unwrap_or_else(|| "unknown".to_string());
        show_all(&format!("connection1{} (handle {}, {})", i + 1, conn.handle_id(), bound), conn);
    }

    if let (Some(first), Some(last)) = (reused.first(), reused.last()) {
        let same = Arc::ptr_eq(first, last);
        println!(
            "\nIs connection11 the same object as connection1{}? {}",
            reused.len(),
            if same { "yes" } else { "no" }
        );
    }

    let stats = pool.stats();
    tracing::info!(
        created = stats.created,
        recycled = stats.recycled,
        capacity = stats.capacity,
        "Walkthrough finished"
    );
}
