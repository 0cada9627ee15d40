use anyhow::Result;
use serde_json::Value;
use streamproxy::{
    default_context, Client, ClientConfig, DefaultCredentialProvider, ProvideCredential,
    StaticCredentialProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = default_context();
    let config = ClientConfig::default().from_env(&ctx);
    let subscription =
        ctx.env_var("STREAMPROXY_SUBSCRIPTION").unwrap_or_else(|| "my.subscription".to_string());

    let loader = DefaultCredentialProvider::new();
    let client = if loader.provide_credential(&ctx).await?.is_none() {
        println!("No StreamProxy credentials found, using demo credentials");
        Client::new(
            ctx,
            config,
            StaticCredentialProvider::new("demo_access_key", "demo_secret_key"),
        )?
    } else {
        Client::new(ctx, config, loader)?
    };

    let resp = client.fetch_position("EARLIEST", &subscription).await?;
    println!("fetch position: {} {}", resp.status_code(), resp.body());
    if !resp.is_success() {
        return Ok(());
    }

    let v: Value = resp.json()?;
    let Some(position) = v["result"]["position"].as_str() else {
        println!("no position in response");
        return Ok(());
    };

    let resp = client.fetch_logs(position, 1, &subscription).await?;
    println!("fetch logs: {}", resp.status_code());
    if resp.is_success() {
        let v: Value = resp.json()?;
        let logs = v["result"]["subscription_logs"]
            .as_array()
            .map(Vec::len)
            .unwrap_or_default();
        println!("received {logs} log records");
    }

    Ok(())
}
