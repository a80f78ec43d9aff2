//! The Steam Community session. Logging in encrypts the password with a key issued by the
//! server, answers captcha or Steam Guard challenges on retry, and finishes by posting the
//! transfer parameters which install the session cookies.

mod helpers;

pub use helpers::encrypt_password;

#[cfg(test)]
pub(crate) use helpers::test_key;

use helpers::community_headers;
use crate::enums::SessionState;
use crate::error::{Error, ParameterError};
use crate::helpers::{check_response, join_url, parses_response};
use crate::response::{LoginResponse, RsaKeyResponse, NO_CAPTCHA_GID};
use std::collections::HashMap;
use std::sync::Arc;
use reqwest::cookie::{CookieStore, Jar};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::Serialize;
use url::Url;

/// A Steam Community session for one account.
///
/// The session owns its state; logging in requires `&mut self`, so an instance cannot be driven
/// through two logins at once. Use one instance per account.
#[derive(Debug)]
pub struct SteamCommunity {
    /// The client for making requests.
    client: ClientWithMiddleware,
    /// The cookies used by `client`.
    cookies: Arc<Jar>,
    /// Base URL of the community site.
    community_url: Url,
    /// The current authentication phase.
    session_state: SessionState,
    /// The response to the last login attempt.
    login_response: Option<LoginResponse>,
}

impl SteamCommunity {
    pub(crate) fn new(
        client: ClientWithMiddleware,
        cookies: Arc<Jar>,
        community_url: Url,
    ) -> Self {
        Self {
            client,
            cookies,
            community_url,
            session_state: SessionState::default(),
            login_response: None,
        }
    }

    /// The current authentication phase.
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    /// Whether the last login attempt completed.
    pub fn is_logged_in(&self) -> bool {
        self.session_state == SessionState::LoggedIn
    }

    /// The response to the last login attempt.
    pub fn login_response(&self) -> Option<&LoginResponse> {
        self.login_response.as_ref()
    }

    /// The ID of the captcha issued by the last login attempt.
    pub fn captcha_gid(&self) -> Option<&str> {
        self.login_response.as_ref().and_then(|response| response.captcha_gid())
    }

    /// The URL of the captcha image issued by the last login attempt.
    pub fn captcha_url(&self) -> Option<String> {
        self.captcha_gid().map(|gid| self.captcha_url_for(gid))
    }

    fn captcha_url_for(&self, gid: &str) -> String {
        format!(
            "{}/public/captcha.php?gid={gid}",
            self.community_url.as_str().trim_end_matches('/'),
        )
    }

    fn get_url(&self, pathname: &str) -> Result<Url, ParameterError> {
        join_url(&self.community_url, pathname)
    }

    /// Adds a cookie for the community site with path `/`.
    pub fn add_cookie(
        &self,
        name: &str,
        value: &str,
        secure: bool,
    ) {
        let secure = if secure { "; Secure" } else { "" };
        let cookie = format!("{name}={value}; Path=/{secure}");

        self.cookies.add_cookie_str(&cookie, &self.community_url);
    }

    /// The `Cookie` header that would be sent to the community site.
    pub fn cookies(&self) -> Option<String> {
        self.cookies
            .cookies(&self.community_url)
            .and_then(|value| value.to_str().ok().map(String::from))
    }

    fn community_request<T>(
        &self,
        url: Url,
        form: &T,
        ajax: bool,
    ) -> Result<RequestBuilder, Error>
    where
        T: Serialize + ?Sized,
    {
        let referer = self.get_url("/tradeoffer/1")?;
        let headers = community_headers(&url, referer.as_str(), ajax)?;

        // Set after the form so the charset in our Content-Type is kept.
        Ok(self.client.post(url)
            .form(form)
            .headers(headers))
    }

    /// Posts `form` to a community URL with the session cookies and returns the response body.
    /// With `ajax` the request is marked as an XMLHttpRequest. A body which is not UTF-8 is an
    /// error.
    pub async fn community_call<T>(
        &self,
        url: &str,
        form: &T,
        ajax: bool,
    ) -> Result<String, Error>
    where
        T: Serialize + ?Sized,
    {
        let url = Url::parse(url)?;
        let response = self.community_request(url, form, ajax)?
            .send()
            .await?;
        let body = check_response(response).await?;

        String::from_utf8(body.to_vec())
            .map_err(|error| Error::Response(format!("Response body is not valid UTF-8: {error}")))
    }

    async fn get_rsa_key(
        &self,
        username: &str,
    ) -> Result<RsaKeyResponse, Error> {
        #[derive(Serialize, Debug)]
        struct GetRsaKeyParams<'a> {
            username: &'a str,
        }

        let uri = self.get_url("/login/getrsakey/")?;
        let response = self.community_request(uri, &GetRsaKeyParams { username }, false)?
            .send()
            .await?;

        parses_response(response).await
    }

    async fn do_login(
        &self,
        username: &str,
        encrypted_password: &str,
        rsatimestamp: &str,
        steam_guard_code: Option<&str>,
        captcha_text: Option<&str>,
    ) -> Result<LoginResponse, Error> {
        #[derive(Serialize, Debug)]
        struct DoLoginParams<'a> {
            password: &'a str,
            username: &'a str,
            captchagid: &'a str,
            captcha_text: &'a str,
            emailauth: &'a str,
            emailsteamid: &'a str,
            rsatimestamp: &'a str,
        }

        // Challenges from the previous attempt are answered in this one.
        let (captchagid, emailsteamid) = match &self.login_response {
            Some(previous) => (previous.captcha_gid.as_str(), previous.emailsteamid.as_str()),
            None => (NO_CAPTCHA_GID, ""),
        };
        let params = DoLoginParams {
            password: encrypted_password,
            username,
            captchagid,
            captcha_text: captcha_text.unwrap_or_default(),
            emailauth: steam_guard_code.unwrap_or_default(),
            emailsteamid,
            rsatimestamp,
        };
        let uri = self.get_url("/login/dologin/")?;
        let response = self.community_request(uri, &params, false)?
            .send()
            .await?;

        parses_response(response).await
    }

    /// Posts the transfer parameters. Only the cookies set by the response matter, so failures
    /// are logged and otherwise ignored.
    async fn transfer_session(
        &self,
        login_response: &LoginResponse,
    ) {
        let Some(transfer_url) = &login_response.transfer_url else {
            log::warn!("Login succeeded without a transfer URL");
            return;
        };
        let result = match Url::parse(transfer_url) {
            Ok(url) => match self.community_request(url, &login_response.transfer_parameters, false) {
                Ok(request) => request.send().await.map_err(Error::from),
                Err(error) => Err(error),
            },
            Err(error) => Err(error.into()),
        };

        match result {
            Ok(response) if response.status().is_success() => {
                log::debug!("Transferred session to {transfer_url}");
            },
            Ok(response) => {
                log::warn!("Session transfer to {transfer_url} returned {}", response.status());
            },
            Err(error) => {
                log::warn!("Session transfer to {transfer_url} failed: {error}");
            },
        }
    }

    /// Logs in to Steam Community.
    ///
    /// Expected outcomes are returned as a [`SessionState`]: when it is
    /// [`SessionState::CaptchaNeeded`] or [`SessionState::SteamGuardNeeded`], call this again
    /// with `captcha_text` (see [`SteamCommunity::captcha_url`]) or `steam_guard_code` filled
    /// in. Transport, decoding and encryption failures are returned as errors and leave the
    /// session state unchanged.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        steam_guard_code: Option<&str>,
        captcha_text: Option<&str>,
    ) -> Result<SessionState, Error> {
        log::debug!("Getting RSA key for {username}");

        let rsa_key = self.get_rsa_key(username).await?;

        if !rsa_key.success {
            log::debug!("No RSA key issued for {username}");
            self.session_state = SessionState::GetRsaFailed;
            return Ok(self.session_state);
        }

        let encrypted_password = encrypt_password(
            password,
            &rsa_key.publickey_mod,
            &rsa_key.publickey_exp,
        )?;

        log::debug!("Submitting login for {username}");

        let login_response = self.do_login(
            username,
            &encrypted_password,
            &rsa_key.timestamp,
            steam_guard_code,
            captcha_text,
        ).await?;
        let session_state = if login_response.captcha_needed {
            log::info!("Captcha is needed: {}", self.captcha_url_for(&login_response.captcha_gid));
            SessionState::CaptchaNeeded
        } else if login_response.emailauth_needed {
            log::info!("Steam Guard code is needed");
            SessionState::SteamGuardNeeded
        } else if login_response.success {
            self.transfer_session(&login_response).await;
            log::info!("Logged in as {username}");
            SessionState::LoggedIn
        } else {
            log::info!(
                "Login failed: {}",
                login_response.message.as_deref().unwrap_or("no message"),
            );
            SessionState::LoginFailed
        };

        self.login_response = Some(login_response);
        self.session_state = session_state;

        Ok(session_state)
    }

    /// Logs in without a captcha or Steam Guard code.
    pub async fn login_with_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<SessionState, Error> {
        self.login(username, password, None, None).await
    }

    /// The transfer parameters from the last successful login.
    pub fn transfer_parameters(&self) -> Option<&HashMap<String, String>> {
        self.login_response
            .as_ref()
            .filter(|response| response.success)
            .map(|response| &response.transfer_parameters)
    }
}
