//! URL construction for every API target.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::endpoint::Endpoint;
use crate::models::ResourceId;

/// Everything but RFC 3986 unreserved characters is escaped, so an id always
/// stays a single path segment or query value.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(id: &ResourceId) -> String {
    utf8_percent_encode(&id.to_string(), ID_ENCODE_SET).to_string()
}

/// Top-level resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Files,
    Folders,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Files => "files",
            Collection::Folders => "folders",
        }
    }
}

/// An addressable API target.
///
/// Action routes (`MoveFile`, `UploadFile`, ...) live at the origin root and
/// are not nested under their collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'a> {
    /// The collection itself, or one item of it.
    Resource {
        collection: Collection,
        id: Option<&'a ResourceId>,
    },
    MoveFile {
        id: &'a ResourceId,
        dest: &'a ResourceId,
    },
    MoveFolder {
        id: &'a ResourceId,
        dest: &'a ResourceId,
    },
    UploadFile {
        dest: &'a ResourceId,
    },
    DownloadFile {
        id: &'a ResourceId,
    },
}

impl<'a> Route<'a> {
    pub fn collection(collection: Collection) -> Self {
        Route::Resource {
            collection,
            id: None,
        }
    }

    pub fn item(collection: Collection, id: &'a ResourceId) -> Self {
        Route::Resource {
            collection,
            id: Some(id),
        }
    }

    /// Fully qualified URL of this route against `endpoint`.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        let origin = endpoint.origin();
        match self {
            Route::Resource { collection, id: None } => {
                format!("{}/{}", origin, collection.as_str())
            }
            Route::Resource {
                collection,
                id: Some(id),
            } => format!("{}/{}/{}", origin, collection.as_str(), encode(id)),
            Route::MoveFile { id, dest } => {
                format!("{}/MoveFile/{}?dest={}", origin, encode(id), encode(dest))
            }
            Route::MoveFolder { id, dest } => {
                format!("{}/MoveFolder/{}?dest={}", origin, encode(id), encode(dest))
            }
            Route::UploadFile { dest } => format!("{}/UploadFile?dest={}", origin, encode(dest)),
            Route::DownloadFile { id } => format!("{}/DownloadFile/{}", origin, encode(id)),
        }
    }
}
