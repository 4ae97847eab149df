//! Folder operations.

use reqwest::Method;

use crate::client::require_id;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{
    CreateFolderRequest, Created, FolderContent, FolderResource, ResourceId, UpdateFolderRequest,
};
use crate::routes::{Collection, Route};
use crate::transport::{Body, Transport};

/// Folder operations, borrowed from a [`StorageClient`](crate::StorageClient).
pub struct FolderClient<'a> {
    endpoint: &'a Endpoint,
    transport: &'a Transport,
}

impl<'a> FolderClient<'a> {
    pub(crate) fn new(endpoint: &'a Endpoint, transport: &'a Transport) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// List the children of a folder, or of the root when `id` is `None`.
    pub async fn content(&self, id: Option<&ResourceId>) -> Result<FolderContent> {
        let url = Route::Resource {
            collection: Collection::Folders,
            id,
        }
        .url(self.endpoint);
        self.transport.fetch(Method::GET, &url, Body::Empty).await
    }

    /// Create a folder. Resolves with the server's answer unchanged.
    pub async fn create(&self, request: &CreateFolderRequest) -> Result<Created<FolderResource>> {
        let url = Route::collection(Collection::Folders).url(self.endpoint);
        self.transport
            .fetch(Method::POST, &url, Body::json(request)?)
            .await
    }

    /// Replace a folder's name and parent.
    ///
    /// Requests without an id are rejected without contacting the server.
    pub async fn update(&self, request: &UpdateFolderRequest) -> Result<()> {
        let id = require_id(request.id.as_ref(), "folder to update")?;
        let url = Route::item(Collection::Folders, id).url(self.endpoint);
        self.transport
            .execute(Method::PUT, &url, Body::json(request)?)
            .await
    }

    /// Delete a folder. What happens to its content is up to the server.
    pub async fn delete(&self, id: &ResourceId) -> Result<()> {
        let id = require_id(Some(id), "folder to delete")?;
        let url = Route::item(Collection::Folders, id).url(self.endpoint);
        self.transport.execute(Method::DELETE, &url, Body::Empty).await
    }

    /// Move a folder under `dest`.
    pub async fn move_to(&self, id: &ResourceId, dest: &ResourceId) -> Result<()> {
        let url = Route::MoveFolder { id, dest }.url(self.endpoint);
        self.transport.execute(Method::PUT, &url, Body::Empty).await
    }
}
