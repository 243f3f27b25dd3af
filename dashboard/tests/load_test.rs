use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Clone, Serialize)]
struct SensorReading {
    temperature: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct IngestResponse {
    status: String,
    message: String,
}

impl SensorReading {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Self {
            temperature: rng.gen_range(15.0..35.0),
            humidity: rng.gen_range(30.0..80.0),
        }
    }
}

/// Requires a dashboard instance on localhost:8000 with a fresh data file.
#[tokio::test]
#[ignore]
async fn test_sustained_ingest() {
    println!("\n🚀 Starting load test against http://localhost:8000");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let total_messages = 1500;
    let client = reqwest::Client::new();

    println!("\n📊 Test configuration:");
    println!("  Total posts: {}", total_messages);

    let start = Instant::now();
    let mut sent_count = 0;
    let mut error_count = 0;

    for i in 0..total_messages {
        let reading = SensorReading::random();

        match client
            .post("http://localhost:8000/api/update")
            .json(&reading)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                let ack: IngestResponse = response.json().await.unwrap();
                assert_eq!(ack.status, "success");
                assert_eq!(ack.message, "Data saved");
                sent_count += 1;
            }
            Ok(response) => {
                eprintln!("POST {} failed with status {}", i, response.status());
                error_count += 1;
            }
            Err(e) => {
                eprintln!("POST {} failed: {}", i, e);
                error_count += 1;
            }
        }

        if i % 100 == 0 && i > 0 {
            println!("  ...{} posts", i);
            sleep(Duration::from_millis(10)).await;
        }
    }

    let elapsed = start.elapsed();
    println!("\n✅ Results:");
    println!("  Sent:    {}", sent_count);
    println!("  Errors:  {}", error_count);
    println!("  Elapsed: {:.1}s", elapsed.as_secs_f64());

    assert_eq!(error_count, 0);

    // The history cap keeps the dashboard at 100 pages even after 1500 posts.
    let html = client
        .get("http://localhost:8000/?page=9999")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Page 100 of 100"));
}
