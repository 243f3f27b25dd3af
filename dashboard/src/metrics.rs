use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref READINGS_TOTAL: Counter = Counter::with_opts(Opts::new(
        "dashboard_readings_total",
        "Total sensor readings accepted by the ingest endpoint"
    ))
    .unwrap();
    pub static ref SAVE_FAILURES_TOTAL: Counter = Counter::with_opts(Opts::new(
        "dashboard_save_failures_total",
        "Total history save failures"
    ))
    .unwrap();
    pub static ref PAGES_RENDERED_TOTAL: Counter = Counter::with_opts(Opts::new(
        "dashboard_pages_rendered_total",
        "Total dashboard pages rendered"
    ))
    .unwrap();
}

pub fn init_metrics() {
    REGISTRY.register(Box::new(READINGS_TOTAL.clone())).unwrap();
    REGISTRY
        .register(Box::new(SAVE_FAILURES_TOTAL.clone()))
        .unwrap();
    REGISTRY
        .register(Box::new(PAGES_RENDERED_TOTAL.clone()))
        .unwrap();
}

pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
