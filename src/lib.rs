//! remote_fs_client - A client for a remote file and folder storage API.
//!
//! This library provides functionality to:
//! - List, create, rename, move and delete folders
//! - Upload, move, delete and download files
//! - Build download URLs without contacting the server
//!
//! # Example
//!
//! ```no_run
//! use remote_fs_client::{CreateFolderRequest, Endpoint, StorageClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StorageClient::new(Endpoint::from_env());
//!
//!     let content = client.folders().content(None).await?;
//!     for folder in &content.folders {
//!         println!("{}", folder);
//!     }
//!
//!     let created = client
//!         .folders()
//!         .create(&CreateFolderRequest::new("Photos", None))
//!         .await?;
//!     println!("created {}", created.id());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod files;
pub mod folders;
pub mod logging;
pub mod models;
pub mod routes;
pub mod transport;

// Re-exports for convenience
pub use client::StorageClient;
pub use endpoint::Endpoint;
pub use error::{Result, StorageError};
pub use files::{FileClient, FileUpload};
pub use folders::FolderClient;
pub use models::{
    CreateFolderRequest, Created, FileResource, FolderContent, FolderResource, ResourceId,
    UpdateFolderRequest,
};
