//! Data models for the file storage API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a file or folder.
///
/// The server may hand out numeric or textual ids; both are kept in the shape
/// they arrived in so they serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl ResourceId {
    /// Id of the root folder.
    pub const ROOT: ResourceId = ResourceId::Number(0);

    /// Parse a command-line or URL fragment, preferring the numeric form.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        // Only canonical integers; "007" or "+5" stay textual.
        match trimmed.parse::<i64>() {
            Ok(n) if n.to_string() == trimmed => ResourceId::Number(n),
            _ => ResourceId::Text(trimmed.to_string()),
        }
    }

    /// A blank textual id addresses nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            ResourceId::Number(_) => false,
            ResourceId::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => f.pad(&n.to_string()),
            ResourceId::Text(s) => f.pad(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        ResourceId::Text(value)
    }
}

/// Anything the API addresses by id.
pub trait Identified {
    fn id(&self) -> &ResourceId;
}

/// A stored file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: ResourceId,
    pub name: String,
    /// Listings omit the parent of files since it is the listed folder.
    #[serde(default)]
    pub parent_id: Option<ResourceId>,
}

/// A folder. A `None` parent means the folder is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResource {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<ResourceId>,
}

impl Identified for FileResource {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl Identified for FolderResource {
    fn id(&self) -> &ResourceId {
        &self.id
    }
}

impl fmt::Display for FileResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<8} {}", self.id, "file", self.name)
    }
}

impl fmt::Display for FolderResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<8} {}", self.id, "folder", self.name)
    }
}

/// Response from `GET /folders[/{id}]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderContent {
    #[serde(default)]
    pub current_folder: Option<FolderResource>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folders: Vec<FolderResource>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<FileResource>,
}

impl FolderContent {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

// The server encodes an empty child list as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Body of `POST /folders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_id: Option<ResourceId>,
}

impl CreateFolderRequest {
    pub fn new(name: impl Into<String>, parent_id: Option<ResourceId>) -> Self {
        Self {
            name: name.into(),
            parent_id,
        }
    }
}

/// Body of `PUT /folders/{id}`: a full replacement of the folder's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    pub id: Option<ResourceId>,
    pub name: String,
    pub parent_id: Option<ResourceId>,
}

impl UpdateFolderRequest {
    pub fn new(id: ResourceId, name: impl Into<String>, parent_id: Option<ResourceId>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            parent_id,
        }
    }
}

impl From<FolderResource> for UpdateFolderRequest {
    fn from(folder: FolderResource) -> Self {
        Self {
            id: Some(folder.id),
            name: folder.name,
            parent_id: folder.parent_id,
        }
    }
}

/// Body returned by create and upload calls.
///
/// Some servers answer with the bare id of the new resource, others with the
/// full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Created<T> {
    Id(ResourceId),
    Resource(T),
}

impl<T: Identified> Created<T> {
    /// Id of the created resource, whichever shape the server used.
    pub fn id(&self) -> &ResourceId {
        match self {
            Created::Id(id) => id,
            Created::Resource(resource) => resource.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_parse() {
        assert_eq!(ResourceId::parse("42"), ResourceId::Number(42));
        assert_eq!(ResourceId::parse(" 7 "), ResourceId::Number(7));
        assert_eq!(ResourceId::parse("abc"), ResourceId::Text("abc".to_string()));
        assert_eq!(ResourceId::parse("-3"), ResourceId::Number(-3));
    }

    #[test]
    fn test_resource_id_parse_keeps_non_canonical_numbers() {
        assert_eq!(ResourceId::parse("007"), ResourceId::Text("007".to_string()));
        assert_eq!(ResourceId::parse("+5"), ResourceId::Text("+5".to_string()));
        assert_eq!(ResourceId::parse("0"), ResourceId::ROOT);
    }

    #[test]
    fn test_resource_id_blank() {
        assert!(ResourceId::from("").is_blank());
        assert!(ResourceId::from("   ").is_blank());
        assert!(!ResourceId::from("a").is_blank());
        assert!(!ResourceId::ROOT.is_blank());
    }

    #[test]
    fn test_resource_id_keeps_wire_shape() {
        let numeric: ResourceId = serde_json::from_str("12").unwrap();
        let textual: ResourceId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "12");
        assert_eq!(serde_json::to_string(&textual).unwrap(), "\"12\"");
        assert_eq!(numeric.to_string(), textual.to_string());
    }

    #[test]
    fn test_folder_deserialize_root() {
        let json = r#"{"id": 0, "name": "", "parentId": null}"#;
        let folder: FolderResource = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, ResourceId::ROOT);
        assert!(folder.parent_id.is_none());
    }

    #[test]
    fn test_folder_content_with_null_lists() {
        let json = r#"{
            "currentFolder": {"id": 2, "name": "Summer", "parentId": 1},
            "folders": null,
            "files": [{"id": 0, "name": "file1.txt"}]
        }"#;

        let content: FolderContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.current_folder.unwrap().name, "Summer");
        assert!(content.folders.is_empty());
        assert_eq!(content.files.len(), 1);
        assert!(content.files[0].parent_id.is_none());
    }

    #[test]
    fn test_create_request_serializes_null_parent() {
        let request = CreateFolderRequest::new("X", None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "X", "parentId": null}));
    }

    #[test]
    fn test_created_variants() {
        let bare: Created<FolderResource> = serde_json::from_str("5").unwrap();
        assert_eq!(bare, Created::Id(ResourceId::Number(5)));
        assert_eq!(bare.id(), &ResourceId::Number(5));

        let full: Created<FolderResource> =
            serde_json::from_str(r#"{"id": 6, "name": "Docs", "parentId": 0}"#).unwrap();
        assert_eq!(full.id(), &ResourceId::Number(6));
        assert!(matches!(full, Created::Resource(_)));
    }

    #[test]
    fn test_display() {
        let file = FileResource {
            id: ResourceId::Number(1),
            name: "file2.txt".to_string(),
            parent_id: None,
        };
        assert_eq!(file.to_string(), format!("{:<12} {:<8} {}", "1", "file", "file2.txt"));

        let folder = FolderResource {
            id: ResourceId::from("photos"),
            name: "Photos".to_string(),
            parent_id: None,
        };
        let row = folder.to_string();
        assert_eq!(row.find("folder"), Some(13));
        assert_eq!(row.find("Photos"), Some(22));
    }
}
