use std::io;

use smsclub::{ClientConfig, SentMessages, SmsClubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phones_raw = std::env::var("SMSCLUB_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_PHONES environment variable is required (comma-separated numbers)",
        )
    })?;
    let sender = std::env::var("SMSCLUB_SENDER").unwrap_or_else(|_| "Shop".to_owned());
    let message = std::env::var("SMSCLUB_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsclub demo.".to_owned());

    let phones = phones_raw
        .split(',')
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let client = SmsClubClient::new(ClientConfig::from_env()?);
    let info = client.send_sms(sender, message, phones).await?;

    match SentMessages::from_info(&info) {
        Some(sent) => {
            for (sms_id, phone) in sent.0 {
                println!("{sms_id}: {phone}");
            }
        }
        None => println!("info: {info:?}"),
    }

    Ok(())
}
