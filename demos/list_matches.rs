use hltv_scraper::{HltvClient, ResultsOptions, StreamOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> hltv_scraper::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = HltvClient::new();

    let matches = client.list_matches().await?;
    println!("Found {} matches", matches.data.len());
    for warning in &matches.warnings {
        eprintln!("warning: {warning}");
    }

    let results = client.list_results(ResultsOptions { pages: 2 }).await?;
    println!("Found {} results", results.data.len());

    let streams = client
        .list_streams(StreamOptions {
            resolve_links: false,
        })
        .await?;
    println!("Found {} streams", streams.data.len());

    if let Some(first) = results.data.first() {
        let detail = client.get_match(&first.id).await?.into_inner();
        println!(
            "{}",
            serde_json::to_string_pretty(&detail).unwrap_or_default()
        );
    }

    let threads = client.list_active_threads().await?;
    println!("Found {} active threads", threads.data.len());
    Ok(())
}
