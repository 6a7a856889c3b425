//! Texture providers
//!
//! A provider maps a username to the texture descriptor an identity service
//! publishes for it.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use tracing::debug;

use crate::error::UpstreamError;
use crate::models::TextureDescriptor;

/// Ely.by texture lookup; also proxies Mojang accounts
pub const ELY_BY_TEXTURES_URL: &str = "https://skinsystem.ely.by/textures";

/// TLauncher texture lookup
pub const TLAUNCHER_TEXTURES_URL: &str = "https://auth.tlauncher.org/skin/profile/texture/login";

/// User-Agent TLauncher expects from its own mod clients
pub const TLAUNCHER_USER_AGENT: &str = "TLSkinCape/1.381 (Fabric)";

// == Provider Trait ==
/// An identity service that can be asked for a player's textures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextureProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Looks up `username`.
    ///
    /// Succeeds only with a descriptor that holds a skin or a cape.
    async fn fetch_textures(&self, username: &str) -> Result<TextureDescriptor, UpstreamError>;
}

// == HTTP Provider ==
/// A provider reached over HTTP at `<base_url>/<username>`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    name: &'static str,
    base_url: String,
    user_agent: Option<&'static str>,
    client: Client,
}

impl HttpProvider {
    /// Creates a provider that appends the username to `base_url`.
    pub fn new(name: &'static str, base_url: impl Into<String>, client: Client) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            user_agent: None,
            client,
        }
    }

    /// Overrides the client's default User-Agent for this provider.
    pub fn with_user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn ely_by(client: Client) -> Self {
        Self::new("ely.by", ELY_BY_TEXTURES_URL, client)
    }

    pub fn tlauncher(client: Client) -> Self {
        Self::new("tlauncher", TLAUNCHER_TEXTURES_URL, client).with_user_agent(TLAUNCHER_USER_AGENT)
    }

    /// Builds the lookup URL, percent-encoding the username as one path segment.
    pub fn profile_url(&self, username: &str) -> Result<Url, UpstreamError> {
        let invalid = || UpstreamError::InvalidUrl(username.to_string());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }
}

#[async_trait]
impl TextureProvider for HttpProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_textures(&self, username: &str) -> Result<TextureDescriptor, UpstreamError> {
        let url = self.profile_url(username)?;
        debug!("{}: GET {}", self.name, url);

        let mut request = self.client.get(url);
        if let Some(user_agent) = self.user_agent {
            request = request.header(header::USER_AGENT, user_agent);
        }

        let descriptor: TextureDescriptor = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if descriptor.is_empty() {
            return Err(UpstreamError::NoTextures);
        }
        Ok(descriptor)
    }
}
