//! Query parameters of the check endpoint.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::utils::uri_component::decode_uri_component;

/// Operation selected by the `command` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Resolve a short link and extract product identifiers.
    #[default]
    Clean,
    /// Create a short link at the external provider.
    Short,
}

impl Command {
    /// Parses the `command` parameter case-insensitively.
    ///
    /// Anything other than `short`, including an absent or empty value, selects
    /// [`Command::Clean`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(command) if command.eq_ignore_ascii_case("short") => Self::Short,
            _ => Self::Clean,
        }
    }
}

/// Parameters of `GET /check`.
///
/// Parsed from the raw query string rather than through a typed extractor so
/// that repeated keys never cause a rejection: the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckQuery {
    pub command: Option<String>,
    pub url: Option<String>,
    /// Short alias for `url`.
    pub u: Option<String>,
}

impl CheckQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "command" => &mut query.command,
                "url" => &mut query.url,
                "u" => &mut query.u,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }

    pub fn command(&self) -> Command {
        Command::parse(self.command.as_deref())
    }

    /// Returns the decoded link from `url`, falling back to `u` when `url` is
    /// absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingUrl`] if neither parameter carries a value.
    /// Returns [`ApiError::InvalidUrlEncoding`] if the value cannot be decoded.
    pub fn link(&self) -> Result<String, ApiError> {
        let raw = self
            .url
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.u.as_deref().filter(|v| !v.is_empty()))
            .ok_or(ApiError::MissingUrl)?;

        decode_uri_component(raw).map_err(|_| ApiError::InvalidUrlEncoding)
    }
}
