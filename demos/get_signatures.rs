use smsclub::{ClientConfig, Signatures, SmsClubClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = SmsClubClient::new(ClientConfig::from_env()?);
    let info = client.get_signatures().await?;

    match Signatures::from_info(&info) {
        Some(names) => println!("sender names: {}", names.0.join(", ")),
        None => println!("info: {info}"),
    }

    Ok(())
}
