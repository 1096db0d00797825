/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Resolves user supplied Imgur URLs to the resource they point at.
//!
//! The same identifier can be valid in several of Imgur's namespaces, so the URL alone is not
//! enough to know which endpoint holds the record. The URL shape picks a strategy and the
//! strategy probes the more specific gallery endpoints first, falling back to the plain ones.

use crate::v3::errors::ImgurError;
use crate::v3::{
    Album, ApiResponse, Client, GalleryAlbum, GalleryImage, Image, ResourceKind, UrlShape,
};
use async_trait::async_trait;
use serde::Serialize;

/// Default host for URL classification
pub const IMGUR_HOST: &str = "imgur.com";

/// Lookups the resolver probes with.
///
/// [`Client`] implements this against the live API.
#[async_trait]
pub trait ImgurLookup: Send + Sync {
    async fn image(&self, id: &str) -> Result<ApiResponse<Image>, ImgurError>;

    async fn album(&self, id: &str) -> Result<ApiResponse<Album>, ImgurError>;

    async fn gallery_image(&self, id: &str) -> Result<ApiResponse<GalleryImage>, ImgurError>;

    async fn gallery_album(&self, id: &str) -> Result<ApiResponse<GalleryAlbum>, ImgurError>;
}

#[async_trait]
impl ImgurLookup for Client {
    async fn image(&self, id: &str) -> Result<ApiResponse<Image>, ImgurError> {
        Image::from_id(self, id).await
    }

    async fn album(&self, id: &str) -> Result<ApiResponse<Album>, ImgurError> {
        Album::from_id(self, id).await
    }

    async fn gallery_image(&self, id: &str) -> Result<ApiResponse<GalleryImage>, ImgurError> {
        GalleryImage::from_id(self, id).await
    }

    async fn gallery_album(&self, id: &str) -> Result<ApiResponse<GalleryAlbum>, ImgurError> {
        GalleryAlbum::from_id(self, id).await
    }
}

/// The resource a URL resolved to
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "info")]
pub enum ResolvedResource {
    Image(Image),
    Album(Album),
    GalleryImage(GalleryImage),
    GalleryAlbum(GalleryAlbum),
}

impl ResolvedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResolvedResource::Image(_) => ResourceKind::Image,
            ResolvedResource::Album(_) => ResourceKind::Album,
            ResolvedResource::GalleryImage(_) => ResourceKind::GalleryImage,
            ResolvedResource::GalleryAlbum(_) => ResourceKind::GalleryAlbum,
        }
    }

    /// Imgur id of the resolved resource
    pub fn id(&self) -> &str {
        match self {
            ResolvedResource::Image(v) => &v.id,
            ResolvedResource::Album(v) => &v.id,
            ResolvedResource::GalleryImage(v) => &v.id,
            ResolvedResource::GalleryAlbum(v) => &v.id,
        }
    }
}

// Substrings selecting a shape, with the host filled in
struct ShapeRule {
    needles: Vec<String>,
    shape: UrlShape,
}

// Checked in order and the first matching rule wins, so the specific paths must come
// before the bare host.
const SHAPE_RULES: &[(&[&str], UrlShape)] = &[
    (&["://i.{host}/"], UrlShape::DirectImage),
    (&["://{host}/a/", "://m.{host}/a/"], UrlShape::Album),
    (&["://{host}/gallery/", "://m.{host}/gallery/"], UrlShape::Gallery),
    (&["://{host}/", "://m.{host}/"], UrlShape::GenericImage),
];

fn shape_rules(host: &str) -> Vec<ShapeRule> {
    SHAPE_RULES
        .iter()
        .map(|(templates, shape)| ShapeRule {
            needles: templates.iter().map(|t| t.replace("{host}", host)).collect(),
            shape: *shape,
        })
        .collect()
}

/// Resolves URLs using the given lookups
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    lookup: L,
    host: String,
}

impl<L: ImgurLookup> Resolver<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_host(lookup, IMGUR_HOST)
    }

    /// Resolver for a host other than imgur.com (mirrors, test servers)
    pub fn with_host(lookup: L, host: &str) -> Self {
        Self {
            lookup,
            host: host.to_string(),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Determines which URL shape applies, if any
    pub fn classify(&self, url: &str) -> Option<UrlShape> {
        classify(&self.host, url)
    }

    /// Resolves the URL to the image, album, gallery image or gallery album it refers to.
    ///
    /// The returned status is that of the last request made. Errors from URL classification or
    /// identifier extraction carry no status as no request was made.
    pub async fn resolve(&self, url: &str) -> Result<ApiResponse<ResolvedResource>, ImgurError> {
        let url = url.trim();
        let shape = self
            .classify(url)
            .ok_or_else(|| ImgurError::UnrecognizedUrlShape(url.to_string()))?;
        let id = extract_id(shape, url).ok_or_else(|| ImgurError::IdentifierExtraction {
            url: url.to_string(),
            shape,
        })?;
        log::debug!("Detected imgur {} ID {}", shape, id);

        match shape {
            UrlShape::DirectImage | UrlShape::GenericImage => self.gallery_image_or_image(id).await,
            UrlShape::Album => self.album(id).await,
            UrlShape::Gallery => self.gallery_album_or_gallery_image(id).await,
        }
    }

    async fn gallery_image_or_image(
        &self,
        id: &str,
    ) -> Result<ApiResponse<ResolvedResource>, ImgurError> {
        let gallery = self.lookup.gallery_image(id).await;
        if let Some(resp) = succeeded(gallery, ResourceKind::GalleryImage) {
            return Ok(resp.map(ResolvedResource::GalleryImage));
        }
        self.lookup
            .image(id)
            .await
            .map(|resp| resp.map(ResolvedResource::Image))
            .map_err(|err| probe_failed(ResourceKind::Image, Some(ResourceKind::GalleryImage), err))
    }

    async fn album(&self, id: &str) -> Result<ApiResponse<ResolvedResource>, ImgurError> {
        self.lookup
            .album(id)
            .await
            .map(|resp| resp.map(ResolvedResource::Album))
            .map_err(|err| probe_failed(ResourceKind::Album, None, err))
    }

    async fn gallery_album_or_gallery_image(
        &self,
        id: &str,
    ) -> Result<ApiResponse<ResolvedResource>, ImgurError> {
        let gallery_album = self.lookup.gallery_album(id).await;
        if let Some(resp) = succeeded(gallery_album, ResourceKind::GalleryAlbum) {
            return Ok(resp.map(ResolvedResource::GalleryAlbum));
        }
        self.lookup
            .gallery_image(id)
            .await
            .map(|resp| resp.map(ResolvedResource::GalleryImage))
            .map_err(|err| {
                probe_failed(ResourceKind::GalleryImage, Some(ResourceKind::GalleryAlbum), err)
            })
    }
}

impl Client {
    /// Queries Imgur for the resource the URL refers to.
    ///
    /// See [`Resolver::resolve`].
    pub async fn info_from_url(
        &self,
        url: &str,
    ) -> Result<ApiResponse<ResolvedResource>, ImgurError> {
        Resolver::new(self.clone()).resolve(url).await
    }
}

// A probe result is only trusted without an error and with a non error status
fn succeeded<T>(
    result: Result<ApiResponse<T>, ImgurError>,
    kind: ResourceKind,
) -> Option<ApiResponse<T>> {
    match result {
        Ok(resp) if resp.status < 400 => Some(resp),
        Ok(resp) => {
            log::debug!("{} lookup returned status {}, falling back", kind, resp.status);
            None
        }
        Err(err) => {
            log::debug!(
                "{} lookup failed, falling back. err: {} status: {:?}",
                kind,
                err,
                err.status()
            );
            None
        }
    }
}

fn probe_failed(
    probe: ResourceKind,
    fallback_from: Option<ResourceKind>,
    err: ImgurError,
) -> ImgurError {
    ImgurError::ProbeFailed {
        probe,
        fallback_from,
        source: Box::new(err),
    }
}

/// Determines the URL shape for the given host, None if the URL is not recognized
pub fn classify(host: &str, url: &str) -> Option<UrlShape> {
    shape_rules(host)
        .into_iter()
        .find(|rule| rule.needles.iter().any(|n| url.contains(n.as_str())))
        .map(|rule| rule.shape)
}

/// Slices the resource id out of a URL of the given shape
pub fn extract_id(shape: UrlShape, url: &str) -> Option<&str> {
    match shape {
        UrlShape::DirectImage => direct_image_id(url),
        UrlShape::Album | UrlShape::Gallery => path_id(url),
        UrlShape::GenericImage => path_id(url).map(strip_extension).filter(|id| !id.is_empty()),
    }
}

// "https://i.imgur.com/<id>.<ext>": between the last '/' and the last '.'
fn direct_image_id(url: &str) -> Option<&str> {
    let start = url.rfind('/').map_or(0, |i| i + 1);
    let end = url.rfind('.')?;
    if end <= start {
        return None;
    }
    Some(&url[start..end])
}

// ".../<id>?<query>": between the last '/' and the last '?' (or the end)
fn path_id(url: &str) -> Option<&str> {
    let start = url.rfind('/').map_or(0, |i| i + 1);
    let end = url.rfind('?').unwrap_or(url.len());
    if end <= start {
        return None;
    }
    Some(&url[start..end])
}

// "<id>.jpg" -> "<id>"
fn strip_extension(id: &str) -> &str {
    id.rfind('.').map_or(id, |i| &id[..i])
}
