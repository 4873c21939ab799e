//! Producer and reporter running against a shared registry

use crate::common::*;
use roster::{spawn_many, Reporter, WorkloadConfig};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn wait_for_count(registry: &Registry, at_least: usize) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while registry.count() < at_least {
        assert!(Instant::now() < deadline, "producers too slow");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn producers_and_reporter_together() {
    init_tracing();
    let registry = Arc::new(Registry::new());
    let config = WorkloadConfig {
        record_name: "Test customer".to_string(),
        max_pacing_ms: 2,
        display_pacing_ms: 0,
        producers: 4,
    };

    let handles = spawn_many(&registry, &config).unwrap();
    let reporter = Reporter::from_config(Arc::clone(&registry), &config);

    wait_for_count(&registry, 50);

    let report = reporter.count_report();
    assert!(report.count >= 50);
    assert!(report.to_string().ends_with("records created"));

    let mut out = Vec::new();
    let lines = reporter.display(&mut out).unwrap();
    assert!(lines >= report.count);
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().all(|l| l.ends_with("name=Test customer]")));

    let total: u64 = handles.into_iter().map(|h| h.stop()).sum();
    assert_eq!(total as usize, registry.count());
    assert_gapless(&registry.snapshot().ids(), registry.count());
}
