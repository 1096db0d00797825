/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Visibility of an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Privacy {
    #[default]
    Unknown,
    Public,
    Hidden,
    Secret,
}

/// The kinds of resources a URL can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ResourceKind {
    Image,
    Album,
    #[strum(to_string = "Gallery Image")]
    GalleryImage,
    #[strum(to_string = "Gallery Album")]
    GalleryAlbum,
}

/// Shapes of URLs recognized when resolving a URL to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum UrlShape {
    #[strum(to_string = "direct image")]
    DirectImage,
    #[strum(to_string = "album")]
    Album,
    #[strum(to_string = "gallery")]
    Gallery,
    #[strum(to_string = "image")]
    GenericImage,
}
