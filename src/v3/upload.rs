/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::{ApiResponse, Client, Image};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use std::path::Path;

/// Optional properties attached to an uploaded image
#[derive(Debug, Default, Clone)]
pub struct UploadImageProps {
    /// Album id (or deletehash for anonymous albums) to add the image to
    pub album: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,
}

impl UploadImageProps {
    // Form fields sent along with the encoded image
    fn form_fields<'a>(&'a self, encoded: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut form = vec![("image", encoded), ("type", "base64")];
        let optional = [
            ("album", &self.album),
            ("title", &self.title),
            ("description", &self.description),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                form.push((key, value));
            }
        }
        form
    }
}

impl Client {
    const UPLOAD_URI: &'static str = "image";

    /// Uploads image data and returns the created image
    pub async fn upload_image(
        &self,
        data: impl Into<Bytes>,
        props: &UploadImageProps,
    ) -> Result<ApiResponse<Image>, ImgurError> {
        let data = data.into();
        log::debug!("Uploading image of {} bytes", data.len());
        let encoded = STANDARD.encode(&data);
        self.post_form::<Image>(Self::UPLOAD_URI, &props.form_fields(&encoded))
            .await
    }

    /// Reads the file at the given path and uploads it
    pub async fn upload_image_from_file(
        &self,
        path: impl AsRef<Path>,
        props: &UploadImageProps,
    ) -> Result<ApiResponse<Image>, ImgurError> {
        let path = path.as_ref();
        let data = std::fs::read(path).inspect_err(|err| {
            log::error!("Failed reading {}: {}", path.display(), err);
        })?;
        self.upload_image(data, props).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3::Creds;

    #[test]
    fn empty_props_are_not_sent() {
        let props = UploadImageProps {
            album: None,
            title: Some("test title".into()),
            description: Some(String::new()),
        };
        let form = props.form_fields("aGVsbG8=");
        assert_eq!(
            form,
            vec![("image", "aGVsbG8="), ("type", "base64"), ("title", "test title")]
        );
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let client = Client::new(Creds::from_tokens("cid", None, None)).unwrap();
        let err = client
            .upload_image_from_file("/nonexistent/definitely/missing.png", &UploadImageProps::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ImgurError::Io(_)));
    }
}
