use smsclub::{Balance, ClientConfig, SmsClubClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = SmsClubClient::new(ClientConfig::from_env()?);
    let info = client.get_balance().await?;

    match Balance::from_info(&info) {
        Some(balance) => println!(
            "balance: {} {}",
            balance.money,
            balance.currency.unwrap_or_default()
        ),
        None => println!("info: {info}"),
    }

    Ok(())
}
