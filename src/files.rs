//! File operations: delete, move, upload and download.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use crate::client::require_id;
use crate::endpoint::Endpoint;
use crate::error::{Result, StorageError};
use crate::models::{Created, FileResource, ResourceId};
use crate::routes::{Collection, Route};
use crate::transport::{Body, Transport};

/// Multipart field the server reads the uploaded file from.
pub const UPLOAD_FIELD: &str = "file";

enum UploadContent {
    Bytes(Vec<u8>),
    File { file: File, len: u64 },
}

/// A file to be sent with [`FileClient::upload`].
pub struct FileUpload {
    file_name: String,
    mime_type: String,
    content: UploadContent,
}

impl FileUpload {
    /// An in-memory upload. The MIME type is guessed from `file_name`.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime_type,
            content: UploadContent::Bytes(bytes.into()),
        }
    }

    /// Stream a local file without reading it into memory.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StorageError::InvalidArgument(format!("not a file path: {}", path.display()))
            })?
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        let file = File::open(path).await?;
        let len = file.metadata().await?.len();

        Ok(Self {
            file_name,
            mime_type,
            content: UploadContent::File { file, len },
        })
    }

    /// Override the guessed MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn into_form(self) -> Result<Form> {
        let part = match self.content {
            UploadContent::Bytes(bytes) => Part::bytes(bytes),
            UploadContent::File { file, len } => {
                let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
                Part::stream_with_length(body, len)
            }
        };
        let part = part.file_name(self.file_name).mime_str(&self.mime_type)?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

/// File operations, borrowed from a [`StorageClient`](crate::StorageClient).
pub struct FileClient<'a> {
    endpoint: &'a Endpoint,
    transport: &'a Transport,
}

impl<'a> FileClient<'a> {
    pub(crate) fn new(endpoint: &'a Endpoint, transport: &'a Transport) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// URL the file's content can be fetched from. Performs no I/O.
    pub fn download_url(&self, file: &FileResource) -> String {
        self.download_url_for(&file.id)
    }

    /// Same as [`download_url`](Self::download_url) when only the id is known.
    pub fn download_url_for(&self, id: &ResourceId) -> String {
        Route::DownloadFile { id }.url(self.endpoint)
    }

    /// Delete a file by ID.
    ///
    /// A blank id is rejected without contacting the server.
    pub async fn delete(&self, id: &ResourceId) -> Result<()> {
        let id = require_id(Some(id), "file to delete")?;
        let url = Route::item(Collection::Files, id).url(self.endpoint);
        self.transport.execute(Method::DELETE, &url, Body::Empty).await
    }

    /// Move a file into the folder `dest`.
    ///
    /// The server's answer is discarded; re-fetch the folder to observe it.
    pub async fn move_to(&self, id: &ResourceId, dest: &ResourceId) -> Result<()> {
        let url = Route::MoveFile { id, dest }.url(self.endpoint);
        self.transport.execute(Method::PUT, &url, Body::Empty).await
    }

    /// Upload a file into `dest`, or into the root folder when `dest` is `None`.
    ///
    /// # Arguments
    /// * `upload` - The file content and its name
    /// * `dest` - ID of the destination folder
    pub async fn upload(
        &self,
        upload: FileUpload,
        dest: Option<ResourceId>,
    ) -> Result<Created<FileResource>> {
        let dest = dest.unwrap_or(ResourceId::ROOT);
        let url = Route::UploadFile { dest: &dest }.url(self.endpoint);
        tracing::debug!(file = upload.file_name(), %dest, "Uploading file");

        let form = upload.into_form()?;
        self.transport
            .fetch(Method::POST, &url, Body::Multipart(form))
            .await
    }

    /// Download a file to a local path.
    ///
    /// When `destination` is a directory the file is saved under the name the
    /// server reports, falling back to the id. Returns the written path.
    pub async fn download<P: AsRef<Path>>(&self, id: &ResourceId, destination: P) -> Result<PathBuf> {
        let id = require_id(Some(id), "file to download")?;
        let destination = destination.as_ref();
        let url = self.download_url_for(id);

        let response = self.transport.send(Method::GET, &url, Body::Empty).await?;

        let final_path = if destination.is_dir() {
            let name = response
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .and_then(attachment_file_name)
                .unwrap_or_else(|| id.to_string());
            destination.join(name)
        } else {
            destination.to_path_buf()
        };

        // Stream to file
        let mut file = File::create(&final_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        Ok(final_path)
    }
}

/// Extract the file name from a `Content-Disposition` header value.
///
/// An unquoted value runs to the end of the header, so names containing `;`
/// survive.
fn attachment_file_name(header: &str) -> Option<String> {
    let (_, value) = header.split_once("filename=")?;
    let value = value.trim();
    let name = match value.strip_prefix('"') {
        Some(quoted) => quoted.split_once('"').map_or(quoted, |(name, _)| name),
        None => value,
    };
    Path::new(name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
