use super::SteamUser;
use crate::api::SteamTradeOfferAPI;
use crate::community::SteamCommunity;
use crate::enums::Language;
use crate::error::Error;
use crate::helpers::{
    get_default_client,
    parse_base_url,
    API_HOSTNAME,
    COMMUNITY_HOSTNAME,
    USER_AGENT_STRING,
};
use std::sync::Arc;
use reqwest::cookie::Jar;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SteamUser`].
#[derive(Debug, Clone)]
pub struct SteamUserBuilder {
    /// Your account's API key from <https://steamcommunity.com/dev/apikey>.
    pub(crate) api_key: String,
    /// The default language for API responses.
    pub(crate) language: Language,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
    /// Base URL of the community site.
    pub(crate) community_url: String,
    /// Base URL of the Web API.
    pub(crate) api_url: String,
    /// Request cookies.
    pub(crate) cookie_jar: Option<Arc<Jar>>,
    /// Client to use for requests. Remember to also include the cookies connected to this client.
    pub(crate) client: Option<ClientWithMiddleware>,
}

impl SteamUserBuilder {
    /// Creates a new [`SteamUserBuilder`] for the given API key.
    pub fn new<T>(api_key: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            api_key: api_key.into(),
            language: Language::English,
            user_agent: USER_AGENT_STRING,
            community_url: COMMUNITY_HOSTNAME.into(),
            api_url: API_HOSTNAME.into(),
            cookie_jar: None,
            client: None,
        }
    }

    /// The language for API responses. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The user agent for requests. Ignored when a client is supplied.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Base URL of the community site. Defaults to `https://steamcommunity.com`.
    pub fn community_url<T>(mut self, community_url: T) -> Self
    where
        T: Into<String>,
    {
        self.community_url = community_url.into();
        self
    }

    /// Base URL of the Web API. Defaults to `https://api.steampowered.com`.
    pub fn api_url<T>(mut self, api_url: T) -> Self
    where
        T: Into<String>,
    {
        self.api_url = api_url.into();
        self
    }

    /// Client to use for requests. It is also required to include the associated cookies with
    /// this client so that cookies added to the session are sent.
    pub fn client(mut self, client: ClientWithMiddleware, cookies: Arc<Jar>) -> Self {
        self.client = Some(client);
        self.cookie_jar = Some(cookies);
        self
    }

    /// Builds the [`SteamUser`]. Fails if either base URL is invalid or the client cannot be
    /// built.
    pub fn build(self) -> Result<SteamUser, Error> {
        let community_url = parse_base_url(&self.community_url)?;
        let api_url = parse_base_url(&self.api_url)?;
        let cookies = self.cookie_jar.unwrap_or_default();
        let client = match self.client {
            Some(client) => client,
            None => get_default_client(Arc::clone(&cookies), self.user_agent)?,
        };
        let api = SteamTradeOfferAPI::new(
            client.clone(),
            self.api_key,
            self.language,
            api_url,
        );
        let community = SteamCommunity::new(
            client,
            Arc::clone(&cookies),
            community_url,
        );

        Ok(SteamUser {
            cookies,
            community,
            api,
        })
    }
}
