mod reading;

use rand::Rng;
use reading::SensorReading;
use std::env;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let target_url = env::var("TARGET_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let rate: u64 = env::var("RATE")
        .unwrap_or_else(|_| "1".to_string())
        .parse()
        .unwrap_or(1);
    let count: u64 = env::var("COUNT")
        .unwrap_or_else(|_| "0".to_string())
        .parse()
        .unwrap_or(0);

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting sensor simulator");
    info!(
        "Target: {}, Rate: {} readings/s, Count: {}",
        target_url,
        rate,
        if count == 0 { "unbounded".to_string() } else { count.to_string() }
    );

    let client = reqwest::Client::new();
    let endpoint = format!("{}/api/update", target_url);
    let interval = Duration::from_millis(1000 / rate.max(1));

    let mut rng = rand::thread_rng();
    let mut posted = 0u64;

    loop {
        let reading = generate_reading(&mut rng);

        match client.post(&endpoint).json(&reading).send().await {
            Ok(response) if response.status().is_success() => {
                posted += 1;
            }
            Ok(response) => {
                warn!("Ingest rejected with status {}", response.status());
            }
            Err(e) => {
                error!("Failed to post reading: {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }

        if posted > 0 && posted % 100 == 0 {
            info!("Posted {} readings", posted);
        }

        if count > 0 && posted >= count {
            info!("Done, posted {} readings", posted);
            break;
        }

        tokio::time::sleep(interval).await;
    }
}

fn generate_reading(rng: &mut impl Rng) -> SensorReading {
    let temperature = if rng.gen_bool(0.05) {
        rng.gen_range(-50.0..100.0) // 5% outliers
    } else {
        rng.gen_range(15.0..35.0) // Normal range
    };

    let humidity = if rng.gen_bool(0.05) {
        rng.gen_range(0.0..100.0) // 5% outliers
    } else {
        rng.gen_range(30.0..80.0) // Normal range
    };

    SensorReading {
        temperature,
        humidity,
    }
}
