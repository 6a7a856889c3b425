//! Upstream Module
//!
//! Everything that talks to the outside world: the identity providers that
//! publish texture descriptors, the resolver that walks them in priority
//! order, and the downloader for the texture images themselves.

mod client;
mod fetch;
mod provider;
mod resolver;

pub use client::{build_client, DEFAULT_USER_AGENT};
pub use fetch::{HttpImageFetcher, ImageFetcher};
pub use provider::{
    HttpProvider, TextureProvider, ELY_BY_TEXTURES_URL, TLAUNCHER_TEXTURES_URL,
    TLAUNCHER_USER_AGENT,
};
pub use resolver::TextureResolver;

#[cfg(test)]
pub use fetch::MockImageFetcher;
#[cfg(test)]
pub use provider::MockTextureProvider;
