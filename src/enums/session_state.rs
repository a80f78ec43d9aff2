use strum_macros::{Display, EnumString};

/// The authentication phase of a Steam Community session.
/// 
/// Expected outcomes of a login attempt, such as a captcha challenge or a rejected password, are
/// reported as a state rather than as an error.
#[derive(Display, EnumString, Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SessionState {
    /// No login has been completed.
    #[default]
    NotLoggedIn,
    /// The server did not provide an RSA key for the username.
    GetRsaFailed,
    /// A captcha must be solved. Retry the login with the captcha text.
    CaptchaNeeded,
    /// A Steam Guard code was sent by email. Retry the login with the code.
    SteamGuardNeeded,
    /// The credentials were rejected.
    LoginFailed,
    /// The session is logged in and its cookies are set.
    LoggedIn,
}

impl SessionState {
    /// Whether the caller can continue by retrying the login with additional input.
    pub fn needs_input(&self) -> bool {
        matches!(self, Self::CaptchaNeeded | Self::SteamGuardNeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_not_logged_in() {
        assert_eq!(SessionState::default(), SessionState::NotLoggedIn);
    }

    #[test]
    fn challenges_need_input() {
        assert!(SessionState::CaptchaNeeded.needs_input());
        assert!(SessionState::SteamGuardNeeded.needs_input());
        assert!(!SessionState::LoginFailed.needs_input());
    }

    #[test]
    fn round_trips_through_display() {
        let state: SessionState = SessionState::SteamGuardNeeded.to_string().parse().unwrap();

        assert_eq!(state, SessionState::SteamGuardNeeded);
        assert!("LoggedOut".parse::<SessionState>().is_err());
    }
}
