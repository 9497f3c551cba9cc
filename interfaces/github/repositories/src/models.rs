use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `GET /users/{user}/repos`. Other fields of the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fork: bool,
}

/// An array entry that failed validation, kept with its position in the payload.
#[derive(Debug)]
pub struct RejectedEntry {
    pub index: usize,
    pub error: serde_json::Error,
}

#[derive(Debug, Default)]
pub struct DecodedRepositories {
    pub records: Vec<RepositoryRecord>,
    pub rejected: Vec<RejectedEntry>,
}

/// Decodes a repository-list payload.
///
/// The body itself must be a JSON array, otherwise the whole payload is
/// rejected. Entries are validated one by one: a malformed entry is moved to
/// `rejected` and the remaining order of `records` follows the payload.
pub fn decode_repositories(body: &str) -> Result<DecodedRepositories, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let mut decoded = DecodedRepositories::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RepositoryRecord>(entry) {
            Ok(record) => decoded.records.push(record),
            Err(error) => decoded.rejected.push(RejectedEntry { index, error }),
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_records_and_ignores_extra_fields() {
        let body = r#"[
            {"name": "foo", "description": "A tool", "fork": false, "stargazers_count": 3},
            {"name": "bar", "description": null, "fork": true}
        ]"#;

        let decoded = decode_repositories(body).unwrap();
        assert!(decoded.rejected.is_empty());
        assert_eq!(
            decoded.records,
            vec![
                RepositoryRecord {
                    name: "foo".into(),
                    description: Some("A tool".into()),
                    fork: false,
                },
                RepositoryRecord {
                    name: "bar".into(),
                    description: None,
                    fork: true,
                },
            ]
        );
    }

    #[test]
    fn missing_description_is_null() {
        let decoded = decode_repositories(r#"[{"name": "foo", "fork": false}]"#).unwrap();
        assert_eq!(decoded.records[0].description, None);
    }

    #[test]
    fn rejects_malformed_entries_individually() {
        let body = r#"[
            {"description": "no name", "fork": false},
            {"name": "ok", "description": "fine", "fork": false},
            {"name": "bad-fork", "description": "x", "fork": "yes"},
            42
        ]"#;

        let decoded = decode_repositories(body).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].name, "ok");
        let indices: Vec<usize> = decoded.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn non_array_payload_is_an_error() {
        assert!(decode_repositories(r#"{"message": "Not Found"}"#).is_err());
        assert!(decode_repositories("<html></html>").is_err());
        assert!(decode_repositories("").is_err());
    }

    #[test]
    fn empty_array_decodes_to_nothing() {
        let decoded = decode_repositories("[]").unwrap();
        assert!(decoded.records.is_empty());
        assert!(decoded.rejected.is_empty());
    }
}
