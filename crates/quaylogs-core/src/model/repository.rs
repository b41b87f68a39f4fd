//! Repository listing types.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One repository as returned by the listing endpoint.
///
/// Identity is `(namespace, name)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySummary {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
    /// Ranking score assigned upstream. Never recomputed here.
    #[serde(deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_starred: bool,
    pub description: Option<String>,
}

/// Repositories of a namespace, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositorySummary>,
}

impl RepositoryList {
    /// Number of repositories in the list.
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// Returns true if the namespace has no repositories.
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Iterate over repository names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repositories.iter().map(|r| r.name.as_str())
    }
}

impl IntoIterator for RepositoryList {
    type Item = RepositorySummary;
    type IntoIter = std::vec::IntoIter<RepositorySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.repositories.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_listing_in_upstream_order() {
        let body = json!({
            "repositories": [
                {
                    "kind": "image",
                    "name": "mayastor",
                    "namespace": "openebs",
                    "popularity": 12.5,
                    "state": "NORMAL",
                    "is_public": true,
                    "is_starred": false,
                    "description": "storage engine"
                },
                {
                    "kind": "image",
                    "name": "jiva",
                    "namespace": "openebs",
                    "popularity": 40.0,
                    "state": "NORMAL",
                    "is_public": true,
                    "is_starred": true,
                    "description": null
                }
            ]
        });

        let list: RepositoryList = serde_json::from_value(body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["mayastor", "jiva"]);
        assert_eq!(list.repositories[0].popularity, 12.5);
        assert!(list.repositories[1].is_starred);
        assert_eq!(list.repositories[1].description, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let list: RepositoryList =
            serde_json::from_value(json!({"repositories": [{"name": "only-name"}]})).unwrap();
        let repo = &list.repositories[0];
        assert_eq!(repo.name, "only-name");
        assert_eq!(repo.namespace, "");
        assert!(!repo.is_public);
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let list: RepositoryList = serde_json::from_str(
            r#"{"repositories": [{"name": "a", "state": null, "kind": null,
                "popularity": null, "is_public": null, "namespace": null}]}"#,
        )
        .unwrap();
        let repo = &list.repositories[0];
        assert_eq!(repo.name, "a");
        assert_eq!(repo.state, "");
        assert_eq!(repo.popularity, 0.0);
        assert!(!repo.is_public);

        let list: RepositoryList = serde_json::from_str(r#"{"repositories": null}"#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn empty_object_is_an_empty_list() {
        let list: RepositoryList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }
}
