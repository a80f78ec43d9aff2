use steam_web_session::{Language, SessionState, SteamUser};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let api_key = std::env::var("API_KEY")?;
    let username = std::env::var("STEAM_USERNAME")?;
    let password = std::env::var("STEAM_PASSWORD")?;
    let steam_guard_code = std::env::var("STEAM_GUARD_CODE").ok();
    // An API language code such as "german".
    let language = std::env::var("LANGUAGE")
        .ok()
        .and_then(|code| code.parse::<Language>().ok())
        .unwrap_or_default();
    let mut user = SteamUser::builder(api_key)
        .language(language)
        .build()?;
    let state = user.login(&username, &password, steam_guard_code.as_deref(), None).await?;

    if state != SessionState::LoggedIn {
        println!("Could not log in: {state}");
        return Ok(());
    }

    let offers = user.get_incoming_offers().await?;

    println!("{} incoming offers", offers.len());

    for offer in &offers {
        println!(
            "{offer} from {} is {} ({} to receive, {} to give)",
            u64::from(offer.partner()),
            offer.trade_offer_state,
            offer.items_to_receive.len(),
            offer.items_to_give.len(),
        );
    }

    if let Some(offer) = offers.iter().find(|offer| offer.trade_offer_state.is_active()) {
        let offer = user.get_trade_offer(offer.tradeofferid, language).await?;

        println!("Active offer {offer} message: {}", offer.message.as_deref().unwrap_or(""));
    }

    Ok(())
}
