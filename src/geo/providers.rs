//! HTTP geolocation providers.
//!
//! Both endpoints are free, unauthenticated JSON APIs keyed on the caller's
//! address. Responses are normalized into `GeoInfo`.

use serde::Deserialize;

use super::{GeoError, GeoInfo, GeoProvider};
use crate::config::GeoConfig;

/// Shared blocking client: one agent, explicit timeout and retry count.
#[derive(Clone)]
pub(crate) struct HttpFetcher {
    agent: ureq::Agent,
    user_agent: String,
    retries: u32,
}

impl HttpFetcher {
    pub(crate) fn new(config: &GeoConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .into();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
            retries: config.retries,
        }
    }

    /// Fetches `url` as text, retrying up to the configured count.
    fn fetch(&self, provider: &'static str, url: &str) -> Result<String, GeoError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    tracing::debug!(provider, attempt, error = %e, "geo request failed, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn fetch_once(&self, url: &str) -> Result<String, GeoError> {
        let mut response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => GeoError::Status(status),
                other => GeoError::Network(other.to_string()),
            })?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| GeoError::Network(e.to_string()))
    }
}

/// `ipapi.co`: geographic fields plus a language hint.
pub(crate) struct IpApiCo {
    http: HttpFetcher,
    url: String,
}

impl IpApiCo {
    pub(crate) const NAME: &'static str = "ipapi.co";

    pub(crate) fn new(http: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

impl GeoProvider for IpApiCo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lookup(&self) -> Result<GeoInfo, GeoError> {
        let body = self.http.fetch(Self::NAME, &self.url)?;
        parse_ipapi_co(&body)
    }
}

#[derive(Debug, Deserialize)]
struct IpApiCoPayload {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    ip: Option<String>,
    country_code: Option<String>,
    country_name: Option<String>,
    languages: Option<String>,
    region: Option<String>,
    city: Option<String>,
}

/// Normalizes an `ipapi.co` body. Rate limiting and reserved ranges come
/// back as `{"error": true, "reason": ...}`; a body with neither a country
/// nor a language hint carries nothing to map and is rejected too.
pub(crate) fn parse_ipapi_co(body: &str) -> Result<GeoInfo, GeoError> {
    let payload: IpApiCoPayload =
        serde_json::from_str(body).map_err(|e| GeoError::Malformed(e.to_string()))?;
    if payload.error {
        return Err(GeoError::ProviderFailure(
            payload.reason.unwrap_or_else(|| "error".to_string()),
        ));
    }
    let info = GeoInfo {
        source: IpApiCo::NAME,
        ip: non_empty(payload.ip),
        country_code: non_empty(payload.country_code),
        country_name: non_empty(payload.country_name),
        languages: non_empty(payload.languages),
        region: non_empty(payload.region),
        city: non_empty(payload.city),
    };
    if info.country_code.is_none() && info.languages.is_none() {
        return Err(GeoError::Malformed(
            "neither country_code nor languages present".to_string(),
        ));
    }
    Ok(info)
}

/// `ip-api.com`: geographic fields only, with its own `status` field.
pub(crate) struct IpApiCom {
    http: HttpFetcher,
    url: String,
}

impl IpApiCom {
    pub(crate) const NAME: &'static str = "ip-api.com";

    pub(crate) fn new(http: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

impl GeoProvider for IpApiCom {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lookup(&self) -> Result<GeoInfo, GeoError> {
        let body = self.http.fetch(Self::NAME, &self.url)?;
        parse_ip_api_com(&body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiComPayload {
    status: Option<String>,
    message: Option<String>,
    query: Option<String>,
    country_code: Option<String>,
    country: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
}

/// Normalizes an `ip-api.com` body. Anything but `status: "success"` is a failure.
pub(crate) fn parse_ip_api_com(body: &str) -> Result<GeoInfo, GeoError> {
    let payload: IpApiComPayload =
        serde_json::from_str(body).map_err(|e| GeoError::Malformed(e.to_string()))?;
    if payload.status.as_deref() != Some("success") {
        let reason = payload
            .message
            .or(payload.status)
            .unwrap_or_else(|| "missing status".to_string());
        return Err(GeoError::ProviderFailure(reason));
    }
    Ok(GeoInfo {
        source: IpApiCom::NAME,
        ip: non_empty(payload.query),
        country_code: non_empty(payload.country_code),
        country_name: non_empty(payload.country),
        languages: None,
        region: non_empty(payload.region_name),
        city: non_empty(payload.city),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
