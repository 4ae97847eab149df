//! Entry point of the file storage API client.

use std::time::Duration;

use reqwest::Client;

use crate::endpoint::Endpoint;
use crate::error::{Result, StorageError};
use crate::files::FileClient;
use crate::folders::FolderClient;
use crate::models::ResourceId;
use crate::transport::Transport;

/// Client for a remote file storage API.
///
/// Cheap to clone; clones share the connection pool. Holds no state besides
/// its configuration, so calls may run concurrently.
#[derive(Clone)]
pub struct StorageClient {
    endpoint: Endpoint,
    transport: Transport,
}

impl StorageClient {
    /// Create a new StorageClient.
    ///
    /// # Arguments
    /// * `endpoint` - Where the API lives, resolved at startup
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_http(endpoint, Client::new())
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_http(endpoint: Endpoint, http: Client) -> Self {
        Self {
            endpoint,
            transport: Transport::new(http),
        }
    }

    /// Bound every request by `timeout`. No timeout is applied by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.with_timeout(Some(timeout));
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Operations on files.
    pub fn files(&self) -> FileClient<'_> {
        FileClient::new(&self.endpoint, &self.transport)
    }

    /// Operations on folders.
    pub fn folders(&self) -> FolderClient<'_> {
        FolderClient::new(&self.endpoint, &self.transport)
    }
}

/// Reject a missing or blank id before any request is made.
pub(crate) fn require_id<'a>(
    id: Option<&'a ResourceId>,
    what: &str,
) -> Result<&'a ResourceId> {
    match id {
        Some(id) if !id.is_blank() => Ok(id),
        _ => {
            tracing::error!("need an id for the {}", what);
            Err(StorageError::InvalidArgument(format!("need an id for the {}", what)))
        }
    }
}
