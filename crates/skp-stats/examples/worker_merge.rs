//! Several workers count their own cache operations; a collector merges them.
//!
//! Run with: cargo run -p skp-stats --example worker_merge

use skp_stats::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = StatsConfig::enabled();
    let collector = StatsCollector::new();
    let mut handles = Vec::new();

    for worker in 0..4u64 {
        let collector = collector.clone();
        handles.push(tokio::spawn(async move {
            let name = format!("worker-{worker}");
            let mut sink = StatsSink::from_config(&config);

            for i in 0..50u64 {
                sink = sink
                    .register(CacheAction::Set)
                    .register(CacheAction::Get { found: (i + worker) % 3 != 0 });
                if i % 25 == 24 {
                    sink = sink.register(CacheAction::Purge { removed: 2 });
                    collector.publish_sink(name.clone(), &sink);
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
            collector.publish_sink(name, &sink);
        }));
    }

    for handle in handles {
        handle.await?;
    }

    collector.retire("worker-0");

    let report = collector.finalize();
    println!("Producers: {:?}", collector.producers());
    for (name, value) in report.iter() {
        println!("  {name:>14}: {}", value.as_f64());
    }
    println!("{}", report.to_json()?);

    Ok(())
}
