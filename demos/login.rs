use steam_web_session::{SteamUser, SessionState};
use std::io::{self, BufRead, Write};

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut line = String::new();

    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let api_key = std::env::var("API_KEY")?;
    let username = std::env::var("STEAM_USERNAME")?;
    let password = std::env::var("STEAM_PASSWORD")?;
    let mut steam_guard_code = std::env::var("STEAM_GUARD_CODE").ok();
    let mut captcha_text = None;
    let mut user = SteamUser::builder(api_key).build()?;

    loop {
        let state = user.login(
            &username,
            &password,
            steam_guard_code.as_deref(),
            captcha_text.as_deref(),
        ).await?;

        match state {
            SessionState::CaptchaNeeded => {
                let captcha_url = user.captcha_url().unwrap_or_default();

                captcha_text = Some(prompt(&format!("Enter the captcha at {captcha_url}"))?);
            },
            SessionState::SteamGuardNeeded => {
                steam_guard_code = Some(prompt("Enter the Steam Guard code sent to your email")?);
            },
            SessionState::LoggedIn => {
                println!("Logged in. Cookies: {}", user.community().cookies().unwrap_or_default());
                break;
            },
            state => {
                let message = user.login_response()
                    .and_then(|response| response.message.clone())
                    .unwrap_or_default();

                println!("Login ended with {state}: {message}");
                break;
            },
        }
    }

    Ok(())
}
