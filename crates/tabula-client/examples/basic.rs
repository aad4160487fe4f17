//! Fetch and update a table against a locally running Tabula server.
//!
//! Start the server first: `cargo run -p tabula-server`

use serde_json::json;
use tabula_client::TableClient;
use tabula_protocol::{Record, UpdateBatch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TableClient::new("localhost", 33141);

    let players = client.fetch_all("players").await?;
    println!("players before update: {players:?}");

    let mut batch = UpdateBatch::new();
    batch.insert(
        "1".into(),
        Record::from_iter([
            ("name".to_string(), json!("John Doe")),
            ("age".to_string(), json!(30)),
        ]),
    );
    batch.insert(
        "2".into(),
        Record::from_iter([
            ("name".to_string(), json!("Jane Smith")),
            ("age".to_string(), json!(25)),
        ]),
    );

    let status = client.update_all("players", &batch).await?;
    println!("update status: {status}");

    let players = client.fetch_all("players").await?;
    println!("players after update: {players:?}");
    Ok(())
}
