/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use imgur::v3::{
    Album, ApiResponse, Client, Creds, GalleryAlbum, GalleryImage, Image, ImgurError, ImgurLookup,
    ResourceKind,
};
use std::collections::HashMap;
use std::sync::Mutex;

// Client for the live API, None when no client id is configured
#[allow(dead_code)]
pub(crate) fn get_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    dotenvy::dotenv().ok();
    match Creds::from_env() {
        Ok(creds) => Some(Client::new(creds).unwrap()),
        Err(_) => {
            println!("IMGUR_CLIENT_ID environment variable not set, skipping");
            None
        }
    }
}

/// What a scripted lookup answers with
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome {
    // A decoded record with this status
    Found(u16),
    // An API error with this status
    Failed(u16),
}

/// Lookup double answering from a script and recording every call
#[allow(dead_code)]
#[derive(Default)]
pub(crate) struct ScriptedLookup {
    script: HashMap<(ResourceKind, String), Outcome>,
    calls: Mutex<Vec<(ResourceKind, String)>>,
}

#[allow(dead_code)]
impl ScriptedLookup {
    pub(crate) fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    pub(crate) fn on(mut self, kind: ResourceKind, id: &str, outcome: Outcome) -> Self {
        self.script.insert((kind, id.to_string()), outcome);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(ResourceKind, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self, kind: ResourceKind) -> usize {
        self.calls().iter().filter(|(k, _)| *k == kind).count()
    }

    // Unscripted lookups answer like the API does for unknown ids
    fn answer<T>(
        &self,
        kind: ResourceKind,
        id: &str,
        record: impl FnOnce(String) -> T,
    ) -> Result<ApiResponse<T>, ImgurError> {
        self.calls.lock().unwrap().push((kind, id.to_string()));
        let outcome = self
            .script
            .get(&(kind, id.to_string()))
            .copied()
            .unwrap_or(Outcome::Failed(404));
        match outcome {
            Outcome::Found(status) => Ok(ApiResponse {
                payload: record(id.to_string()),
                status,
                rate_limit: None,
            }),
            Outcome::Failed(status) => Err(ImgurError::ApiResponse {
                status,
                message: format!("no {kind} with id {id}"),
            }),
        }
    }
}

#[async_trait]
impl ImgurLookup for ScriptedLookup {
    async fn image(&self, id: &str) -> Result<ApiResponse<Image>, ImgurError> {
        self.answer(ResourceKind::Image, id, |id| Image {
            id,
            ..Default::default()
        })
    }

    async fn album(&self, id: &str) -> Result<ApiResponse<Album>, ImgurError> {
        self.answer(ResourceKind::Album, id, |id| Album {
            id,
            ..Default::default()
        })
    }

    async fn gallery_image(&self, id: &str) -> Result<ApiResponse<GalleryImage>, ImgurError> {
        self.answer(ResourceKind::GalleryImage, id, |id| GalleryImage {
            id,
            ..Default::default()
        })
    }

    async fn gallery_album(&self, id: &str) -> Result<ApiResponse<GalleryAlbum>, ImgurError> {
        self.answer(ResourceKind::GalleryAlbum, id, |id| GalleryAlbum {
            id,
            is_album: true,
            ..Default::default()
        })
    }
}
