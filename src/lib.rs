/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! This Imgur library was created for working with the Imgur APIv3 interface.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com)
//!
//! ## Features
//!
//! - Image, Album, Gallery Image and Gallery Album information (Read only)
//! - Resolving an arbitrary Imgur URL to the resource it refers to
//! - Rate limit information
//! - Refreshing an OAuth2 access token
//! - Uploading images
//!
//! *Anonymous requests only need the client id of a registered application. Getting an
//! OAuth2 access/refresh token pair is left up to the consumer of this library*
//!
//! *If you want to use this library for more that is currently implemented,
//! [`v3::Client::get`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgur = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Imgur to get a client id**
//!
//! ```rust,no_run
//! use imgur::v3::{Client, Creds, ImgurError, ResolvedResource};
//!
//! async fn describe(client_id: &str, url: &str) -> Result<(), ImgurError> {
//!     let client = Client::new(Creds::from_tokens(client_id, None, None))?;
//!
//!     // Figure out what the URL points at
//!     let resolved = client.info_from_url(url).await?;
//!     match resolved.payload {
//!         ResolvedResource::Image(img) => println!("image {} ({})", img.id, img.link),
//!         ResolvedResource::Album(album) => println!("album with {} images", album.images_count),
//!         ResolvedResource::GalleryImage(img) => println!("gallery image, {} points", img.points),
//!         ResolvedResource::GalleryAlbum(album) => println!("gallery album {:?}", album.title),
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
