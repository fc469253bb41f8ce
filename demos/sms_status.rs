use std::io;

use smsclub::{ClientConfig, DeliveryStatuses, SmsClubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sms_ids_raw = std::env::var("SMSCLUB_SMS_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_SMS_IDS environment variable is required (comma-separated ids)",
        )
    })?;
    let sms_ids = sms_ids_raw
        .split(',')
        .map(|id| id.trim().to_owned())
        .collect::<Vec<_>>();

    let client = SmsClubClient::new(ClientConfig::from_env()?);
    let info = client.sms_status(sms_ids).await?;

    match DeliveryStatuses::from_info(&info) {
        Some(statuses) => {
            for (sms_id, status) in statuses.0 {
                println!("{sms_id}: {status}");
            }
        }
        None => println!("info: {info}"),
    }

    Ok(())
}
