/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to the live API and are skipped unless IMGUR_CLIENT_ID is set (a .env file works)
#[cfg(test)]
mod test {
    use crate::helpers;
    use imgur::v3::{GalleryImage, Image, ResolvedResource};

    #[tokio::test]
    async fn image_from_id() {
        let Some(client) = helpers::get_client() else {
            return;
        };
        let resp = Image::from_id(&client, "ClF8rLe").await.unwrap();
        println!("Image info: {:?}", resp);

        let img = resp.payload;
        assert_eq!(resp.status, 200);
        assert_eq!(img.id, "ClF8rLe");
        assert!(!img.animated);
        assert_eq!(img.datetime.timestamp(), 1451248840);
        assert_eq!(img.width, 2448);
        assert_eq!(img.height, 3264);
    }

    #[tokio::test]
    async fn unknown_image_fails() {
        let Some(client) = helpers::get_client() else {
            return;
        };
        let err = GalleryImage::from_id(&client, "thisidisnotreal0").await.unwrap_err();
        println!("Error: {err}");
        assert!(err.status().unwrap_or_default() >= 400);
    }

    #[tokio::test]
    async fn info_from_direct_image_url() {
        let Some(client) = helpers::get_client() else {
            return;
        };
        let resp = client
            .info_from_url("https://i.imgur.com/ClF8rLe.jpg")
            .await
            .unwrap();
        assert_eq!(resp.payload.id(), "ClF8rLe");
        assert!(matches!(
            resp.payload,
            ResolvedResource::Image(_) | ResolvedResource::GalleryImage(_)
        ));
    }

    #[tokio::test]
    async fn rate_limit() {
        let Some(client) = helpers::get_client() else {
            return;
        };
        let resp = client.rate_limit().await.unwrap();
        println!("Rate limit: {:?}", resp.payload);
        assert!(resp.payload.client_remaining <= resp.payload.client_limit);
    }
}
