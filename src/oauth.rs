//! OAuth 1.0a request signing (HMAC-SHA1) for the X posting API.
//!
//! The signing core takes the timestamp and nonce as arguments so it stays
//! deterministic under test; `authorization_header` stamps real values.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

use crate::config::SocialConfig;

type HmacSha1 = Hmac<Sha1>;

// RFC 3986 unreserved characters pass through; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn percent(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// OAuth1 signer over the four posting credentials.
#[derive(Debug)]
pub struct OAuth1<'a> {
    credentials: &'a SocialConfig,
}

impl<'a> OAuth1<'a> {
    pub fn new(credentials: &'a SocialConfig) -> Self {
        Self { credentials }
    }

    /// Build a signed `Authorization` header for one request.
    ///
    /// `extra_params` carries any query or form parameters that take part in
    /// the signature; a JSON-bodied v2 post has none.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(&str, &str)],
    ) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        self.authorization_header_at(method, url, extra_params, timestamp, &nonce)
    }

    /// Deterministic form of `authorization_header`.
    pub fn authorization_header_at(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(&str, &str)],
        timestamp: u64,
        nonce: &str,
    ) -> String {
        let timestamp_str = timestamp.to_string();
        let oauth_params: [(&str, &str); 6] = [
            ("oauth_consumer_key", &self.credentials.api_key),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", &timestamp_str),
            ("oauth_token", &self.credentials.access_token),
            ("oauth_version", "1.0"),
        ];

        let signature = self.sign(method, url, &oauth_params, extra_params);

        // Only the oauth_* parameters go into the header, keys sorted.
        let mut header_params: Vec<(String, String)> = oauth_params
            .iter()
            .map(|(k, v)| (percent(k), percent(v)))
            .collect();
        header_params.push(("oauth_signature".to_string(), percent(&signature)));
        header_params.sort();

        let rendered: Vec<String> = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v))
            .collect();
        format!("OAuth {}", rendered.join(", "))
    }

    /// HMAC-SHA1 over the RFC 5849 signature base string.
    fn sign(
        &self,
        method: &str,
        url: &str,
        oauth_params: &[(&str, &str)],
        extra_params: &[(&str, &str)],
    ) -> String {
        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(extra_params.iter())
            .map(|(k, v)| (percent(k), percent(v)))
            .collect();
        encoded.sort();

        let parameter_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&");
        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent(url),
            percent(&parameter_string)
        );
        let signing_key = format!(
            "{}&{}",
            percent(&self.credentials.api_secret),
            percent(&self.credentials.access_secret)
        );

        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_credentials() -> SocialConfig {
        SocialConfig {
            post_url: "https://api.twitter.com/1.1/statuses/update.json".to_string(),
            api_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            api_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            access_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        }
    }

    #[test]
    fn signature_matches_published_twitter_example() {
        let credentials = doc_credentials();
        let signer = OAuth1::new(&credentials);
        let signature = signer.sign(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &[
                ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
                ("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
                ("oauth_signature_method", "HMAC-SHA1"),
                ("oauth_timestamp", "1318622958"),
                ("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
                ("oauth_version", "1.0"),
            ],
            &[
                ("include_entities", "true"),
                ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ],
        );
        assert_eq!(signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[test]
    fn header_is_well_formed_and_deterministic() {
        let credentials = doc_credentials();
        let signer = OAuth1::new(&credentials);
        let header = signer.authorization_header_at(
            "POST",
            "https://api.twitter.com/2/tweets",
            &[],
            1318622958,
            "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        );
        assert!(header.starts_with("OAuth "), "header was: {}", header);
        assert!(header.contains("oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_signature=\""));
        // Same inputs, same header
        let again = signer.authorization_header_at(
            "POST",
            "https://api.twitter.com/2/tweets",
            &[],
            1318622958,
            "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        );
        assert_eq!(header, again);
    }
}
