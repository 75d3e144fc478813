use std::time::Instant;

use fakeflow_core::config::Config;
use fakeflow_core::generators::Registry;
use fakeflow_core::metadata::MetadataTable;
use fakeflow_core::resolver::Resolver;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn navigation_and_generation_p95_under_25ms() {
    let registry = Registry::new();
    let metadata = MetadataTable::default();
    let config = Config::default();
    let resolver = Resolver::new(&registry, &metadata, &config);
    let queries = [
        "",
        "per",
        "person ",
        "internet em",
        "person fullName nameOrder:lf repeat:10",
        "helpers fake pattern:\"{{person.firstName}} {{location.city}}\"",
    ];

    for _ in 0..20 {
        for query in queries {
            let _ = resolver.resolve(query);
        }
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(60);
        for _ in 0..10 {
            for query in queries {
                let start = Instant::now();
                let _ = resolver.resolve(query);
                samples.push(start.elapsed().as_secs_f64() * 1000.0);
            }
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 25.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 25.0ms); batches={batch_p95:?}",
    );
}
