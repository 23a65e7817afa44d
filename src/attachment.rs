use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// A file reference stored on a notice, download, or staff record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment<'a> {
    External(&'a str),
    Embedded {
        mime: &'a str,
        base64: bool,
        payload: &'a str,
    },
}

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("attachment is an external link")]
    NotEmbedded,
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl<'a> Attachment<'a> {
    pub fn parse(reference: &'a str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        let Some(rest) = reference.strip_prefix("data:") else {
            return Some(Attachment::External(reference));
        };
        let (meta, payload) = rest.split_once(',')?;
        let base64 = meta.ends_with(";base64");
        let mime = meta.split(';').next().unwrap_or_default();
        let mime = if mime.is_empty() { "text/plain" } else { mime };

        Some(Attachment::Embedded {
            mime,
            base64,
            payload,
        })
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Attachment::Embedded { .. })
    }

    pub fn is_image(&self) -> bool {
        match self {
            Attachment::Embedded { mime, .. } => mime.starts_with("image/"),
            Attachment::External(url) => {
                let path = url.split(|ch| ch == '?' || ch == '#').next().unwrap_or_default();
                let path = path.to_ascii_lowercase();
                [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"]
                    .iter()
                    .any(|ext| path.ends_with(ext))
            }
        }
    }

    pub fn content_type(&self) -> &'a str {
        match self {
            Attachment::Embedded { mime, .. } => mime,
            Attachment::External(_) => "application/octet-stream",
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, AttachmentError> {
        match self {
            Attachment::Embedded {
                base64: true,
                payload,
                ..
            } => Ok(STANDARD.decode(payload)?),
            Attachment::Embedded { payload, .. } => Ok(payload.as_bytes().to_vec()),
            Attachment::External(_) => Err(AttachmentError::NotEmbedded),
        }
    }
}

/// Where a link to the attachment should point. External URLs are used as-is;
/// embedded files are served back by the portal under `/files/{kind}/{id}`.
pub fn href(reference: &str, kind: &str, id: &str) -> String {
    match Attachment::parse(reference) {
        Some(Attachment::External(url)) => url.to_string(),
        Some(Attachment::Embedded { .. }) => format!("/files/{kind}/{id}"),
        None => String::new(),
    }
}
