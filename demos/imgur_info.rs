/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate imgur;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use imgur::v3::{Album, Client, Creds, GalleryAlbum, GalleryImage, Image, UploadImageProps};
use std::path::PathBuf;

/// Queries Imgur for images, albums and gallery entries
#[derive(Parser, Debug)]
struct Args {
    /// Your imgur client id. Falls back to IMGUR_CLIENT_ID
    #[arg(long)]
    id: Option<String>,

    /// Gets information based on the URL passed
    #[arg(long)]
    url: Option<String>,

    /// Filepath to an image that will be uploaded to imgur
    #[arg(long)]
    upload: Option<PathBuf>,

    /// The image ID to be queried
    #[arg(long)]
    image: Option<String>,

    /// The album ID to be queried
    #[arg(long)]
    album: Option<String>,

    /// The gallery image ID to be queried
    #[arg(long)]
    gimage: Option<String>,

    /// The gallery album ID to be queried
    #[arg(long)]
    galbum: Option<String>,

    /// Get the current rate limit
    #[arg(long)]
    rate: bool,
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let creds = match &args.id {
        Some(id) => Creds::from_tokens(id, None, None),
        None => Creds::from_env()?,
    };
    let client = Client::new(creds)?;

    if let Some(path) = &args.upload {
        let props = UploadImageProps {
            title: Some("test title".into()),
            description: Some("test desc".into()),
            ..Default::default()
        };
        match client.upload_image_from_file(path, &props).await {
            Ok(resp) => println!("Uploaded: {}", resp.payload.link),
            Err(err) => println!("Status: {:?}\nErr: {}", err.status(), err),
        }
    }

    if args.rate {
        println!("*** RATE LIMIT ***");
        report(client.rate_limit().await.map(|v| v.payload));
    }

    if let Some(id) = &args.image {
        println!("*** IMAGE ***");
        report(Image::from_id(&client, id).await.map(|v| v.payload));
    }

    if let Some(id) = &args.album {
        println!("*** ALBUM ***");
        report(Album::from_id(&client, id).await.map(|v| v.payload));
    }

    if let Some(id) = &args.gimage {
        println!("*** GALLERY IMAGE ***");
        report(GalleryImage::from_id(&client, id).await.map(|v| v.payload));
    }

    if let Some(id) = &args.galbum {
        println!("*** GALLERY ALBUM ***");
        report(GalleryAlbum::from_id(&client, id).await.map(|v| v.payload));
    }

    if let Some(url) = &args.url {
        println!("*** URL ***");
        match client.info_from_url(url).await {
            Ok(resp) => println!("{} (status {}): {:#?}", resp.payload.kind(), resp.status, resp.payload),
            Err(err) => println!("Error resolving URL: {err} (status {:?})", err.status()),
        }
    }

    Ok(())
}

fn report<T: std::fmt::Debug>(result: Result<T, imgur::v3::ImgurError>) {
    match result {
        Ok(v) => println!("{:#?}", v),
        Err(err) => println!("Error: {err}"),
    }
}
