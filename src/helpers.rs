use crate::error::{Error, ParameterError};
use std::sync::Arc;
use bytes::Bytes;
use lazy_regex::regex_is_match;
use reqwest::cookie::CookieStore;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use url::Url;

pub const COMMUNITY_HOSTNAME: &str = "https://steamcommunity.com";
pub const API_HOSTNAME: &str = "https://api.steampowered.com";
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Builds a client which stores cookies in `cookie_store`. No retry middleware is attached;
/// failed requests are returned to the caller as they are.
pub fn get_default_client<T>(
    cookie_store: Arc<T>,
    user_agent_string: &'static str,
) -> Result<ClientWithMiddleware, Error>
where
    T: CookieStore + 'static,
{
    let mut headers = HeaderMap::new();

    headers.insert(header::USER_AGENT, HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .cookie_provider(cookie_store)
        .default_headers(headers)
        .build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Parses a base URL, dropping any trailing slash so paths can be appended.
pub fn parse_base_url(url: &str) -> Result<Url, ParameterError> {
    let url = Url::parse(url.trim_end_matches('/'))?;

    if url.host_str().is_none() {
        return Err(ParameterError::MissingHost(url.to_string()));
    }

    Ok(url)
}

/// Joins a pathname onto a base URL.
pub fn join_url(base: &Url, pathname: &str) -> Result<Url, ParameterError> {
    let url = format!("{}{}", base.as_str().trim_end_matches('/'), pathname);

    Ok(Url::parse(&url)?)
}

fn is_login(location_option: Option<&HeaderValue>) -> bool {
    match location_option {
        Some(location) => {
            if let Ok(location_str) = location.to_str() {
                regex_is_match!("/login", location_str)
            } else {
                false
            }
        },
        None => false,
    }
}

/// Checks the status of a response, returning its body when the request succeeded.
pub async fn check_response(response: reqwest::Response) -> Result<Bytes, Error> {
    let status = response.status();

    match status.as_u16() {
        300..=399 if is_login(response.headers().get(header::LOCATION)) => {
            Err(Error::NotLoggedIn)
        },
        400..=599 => {
            Err(Error::Http(status))
        },
        _ => {
            Ok(response.bytes().await?)
        },
    }
}

/// Checks the response and deserializes its JSON body.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    match serde_json::from_slice::<D>(&body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            let html = String::from_utf8_lossy(&body);

            if regex_is_match!(r#"<h1>Sign In</h1>"#, &html) && regex_is_match!(r#"g_steamID = false;"#, &html) {
                Err(Error::NotLoggedIn)
            } else {
                log::debug!("Unexpected response body: {html}");
                Err(Error::Parse(parse_error))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_login_redirect() {
        let location = HeaderValue::from_static("https://steamcommunity.com/login/home/?goto=");

        assert!(is_login(Some(&location)));
        assert!(!is_login(Some(&HeaderValue::from_static("https://steamcommunity.com/id/me"))));
        assert!(!is_login(None));
    }

    #[test]
    fn joins_paths_onto_base_url() {
        let base = parse_base_url("http://127.0.0.1:8080/").unwrap();
        let url = join_url(&base, "/login/getrsakey/").unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:8080/login/getrsakey/");
    }

    #[test]
    fn rejects_base_url_without_host() {
        assert!(parse_base_url("not a url").is_err());
        assert!(matches!(parse_base_url("data:text/plain,hello"), Err(ParameterError::MissingHost(_))));
    }
}
