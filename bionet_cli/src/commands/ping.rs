use anyhow::Result;
use bionet_api::Client;

pub async fn run() -> Result<()> {
    let client = Client::new();
    client.ping().await?;
    println!("BioNet OData service is reachable");
    Ok(())
}
