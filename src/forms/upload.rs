// forms/upload.rs
//
// `multipart/form-data` bodies. The body is already in memory (capped by the
// caller), so multer runs over a one-chunk stream on the current thread.

use crate::errors::ServerError;
use crate::forms::FormData;
use base64::Engine;
use std::convert::Infallible;

pub fn is_multipart(content_type: &str) -> bool {
    content_type
        .get(..19)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("multipart/form-data"))
}

fn malformed(e: multer::Error) -> ServerError {
    ServerError::BadRequest(format!("Malformed upload: {e}"))
}

/// Text parts become plain fields. A file part becomes a
/// `data:<type>;base64,...` value under its field name; an empty file input
/// (nothing chosen) is skipped.
pub fn parse_multipart(body: Vec<u8>, content_type: &str) -> Result<FormData, ServerError> {
    let boundary = multer::parse_boundary(content_type).map_err(malformed)?;
    let stream = futures::stream::once(async move { Ok::<_, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    futures::executor::block_on(async move {
        let mut form = FormData::default();
        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let is_file = field.file_name().is_some();
            let mime = field
                .content_type()
                .map(|m| m.essence_str().to_owned())
                .unwrap_or_else(|| "application/octet-stream".to_owned());
            let data = field.bytes().await.map_err(malformed)?;

            if !is_file {
                form.set(&name, String::from_utf8_lossy(&data).into_owned());
            } else if !data.is_empty() {
                let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
                form.set(&name, format!("data:{mime};base64,{encoded}"));
            }
        }
        Ok(form)
    })
}
