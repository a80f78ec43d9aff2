//! Error types.

use reqwest::StatusCode;

/// Crate-wide result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error that can occur when making a request or logging in.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A parameter was invalid.
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    /// The response was not in the expected form.
    #[error("Unexpected response: {}", .0)]
    Response(String),
    /// An error was encountered making the request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error was encountered within the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// The response body could not be decoded. This includes trade offer states which are not
    /// known.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The server responded with an unsuccessful status code.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The Web API signaled a failure through the `x-eresult` header.
    #[error("Request failed with EResult {}", .0)]
    EResult(i32),
    /// The request was redirected to the login page.
    #[error("Not logged in")]
    NotLoggedIn,
    /// The password could not be encrypted using the key supplied by the server.
    #[error("{}", .0)]
    Crypto(#[from] CryptoError),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Error {
        Error::Parameter(ParameterError::UrlParse(error))
    }
}

/// An error with a parameter used to build a request.
#[derive(thiserror::Error, Debug)]
pub enum ParameterError {
    /// A URL could not be built from the given parts.
    #[error("Could not build URL: {}", .0)]
    UrlParse(#[from] url::ParseError),
    /// The URL does not include a host.
    #[error("URL has no host: {}", .0)]
    MissingHost(String),
    /// A header value contains characters that are not allowed.
    #[error("Invalid header value: {}", .0)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

/// An error encountered while encrypting the password for login.
#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    /// The modulus is not a valid hexadecimal number.
    #[error("Invalid RSA modulus: {}", .0)]
    InvalidModulus(String),
    /// The exponent is not a valid hexadecimal number.
    #[error("Invalid RSA exponent: {}", .0)]
    InvalidExponent(String),
    /// The key could not be constructed or encryption failed.
    #[error("RSA error: {}", .0)]
    Rsa(#[from] rsa::Error),
}

/// A trade offer state code that is not known.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Unknown trade offer state code {}", .0)]
pub struct UnknownTradeOfferStateError(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_parse_errors_are_parameter_errors() {
        let error = Error::from(url::Url::parse("not a url").unwrap_err());

        assert!(matches!(error, Error::Parameter(ParameterError::UrlParse(_))));
    }

    #[test]
    fn unknown_state_error_names_the_code() {
        let error = UnknownTradeOfferStateError(42);

        assert_eq!(error.to_string(), "Unknown trade offer state code 42");
    }
}
