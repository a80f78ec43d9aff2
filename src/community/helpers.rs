use crate::error::{CryptoError, ParameterError};
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPublicKey};
use rsa::rand_core::OsRng;
use reqwest::header::{self, HeaderMap, HeaderValue};
use url::Url;

const ACCEPT: &str = "text/javascript, text/html, application/xml, text/xml, */*";
const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const X_REQUESTED_WITH: &str = "X-Requested-With";
const X_PROTOTYPE_VERSION: &str = "X-Prototype-Version";

fn parse_hex(value: &str) -> Option<BigUint> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    BigUint::parse_bytes(value.as_bytes(), 16)
}

/// Encrypts `password` with the RSA public key given as hexadecimal `modulus` and `exponent`
/// using PKCS#1 v1.5 padding. Returns the ciphertext encoded as base64.
pub fn encrypt_password(
    password: &str,
    modulus: &str,
    exponent: &str,
) -> Result<String, CryptoError> {
    let n = parse_hex(modulus)
        .ok_or_else(|| CryptoError::InvalidModulus(modulus.into()))?;
    let e = parse_hex(exponent)
        .ok_or_else(|| CryptoError::InvalidExponent(exponent.into()))?;
    let key = RsaPublicKey::new(n, e)?;
    let encrypted = key.encrypt(&mut OsRng, Pkcs1v15Encrypt, password.as_bytes())?;

    Ok(base64::encode(encrypted))
}

/// The value of the `Host` header for `url`, including the port when it is not the default.
pub fn host_header_value(url: &Url) -> Result<HeaderValue, ParameterError> {
    let host = url.host_str()
        .ok_or_else(|| ParameterError::MissingHost(url.to_string()))?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok(HeaderValue::from_str(&host)?)
}

/// Headers sent with every community request. AJAX requests are marked the way the site's own
/// scripts mark them.
pub fn community_headers(
    url: &Url,
    referer: &str,
    ajax: bool,
) -> Result<HeaderMap, ParameterError> {
    let mut headers = HeaderMap::new();

    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    headers.insert(header::HOST, host_header_value(url)?);
    headers.insert(header::REFERER, HeaderValue::from_str(referer)?);

    if ajax {
        headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(X_PROTOTYPE_VERSION, HeaderValue::from_static("1.7"));
    }

    Ok(headers)
}
