use questrade_rs::auth::auth_loader::load_auth_from_env;
use questrade_rs::QuestradeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // QUESTRADE_REFRESH_TOKEN must hold a refresh token generated in the Questrade app hub
    // (set QUESTRADE_PRACTICE=1 for the practice server)
    let auth = load_auth_from_env()?;
    let client = QuestradeClient::connect(auth.refresh_token, auth.environment).await?;

    // The old token is spent now
    println!(
        "export QUESTRADE_REFRESH_TOKEN={}\n",
        client.credentials().refresh_token
    );

    let time = client.get_server_time().await?;
    println!("Server time: {}", time);

    let (user_id, accounts) = client.get_accounts().await?;
    println!("User {} has {} accounts:\n", user_id, accounts.len());
    for (i, account) in accounts.iter().enumerate() {
        println!("{}. {}", i + 1, account);
    }

    let rl = client.rate_limit();
    println!("\n{} requests left until {}", rl.remaining, rl.reset_at);
    println!("\n✓ SDK is working correctly!");

    Ok(())
}
