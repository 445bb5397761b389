//! Firestore Document Store
//!
//! Talks to the Firestore REST API (v1) with `reqwest`. Works from the
//! browser (fetch) as well as natively.

use async_trait::async_trait;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::error::{StoreError, StoreResult};
use super::traits::{Document, DocumentStore, FieldValue, Fields};

/// Characters escaped when a key or collection is used as one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Documents requested per list call
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    #[serde(default)]
    documents: Vec<RawDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize)]
struct WriteBody {
    fields: BTreeMap<String, Value>,
}

/// Firestore REST implementation of [`DocumentStore`]
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    /// `{endpoint}/projects/{project}/databases/{database}/documents`
    documents_url: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(endpoint: &str, project_id: &str, database: &str, api_key: Option<String>) -> Self {
        let documents_url = format!(
            "{}/projects/{}/databases/{}/documents",
            endpoint.trim_end_matches('/'),
            encode_segment(project_id),
            encode_segment(database),
        );
        Self {
            client: reqwest::Client::new(),
            documents_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.documents_url, encode_segment(collection))
    }

    fn document_url(&self, collection: &str, key: &str) -> String {
        format!("{}/{}", self.collection_url(collection), encode_segment(key))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreStore {
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.collection_url(collection))
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = check_status(self.authorize(request).send().await?)?;
            let page: ListPage = parse_json(&response.text().await?)?;
            documents.extend(page.documents.into_iter().map(decode_document));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        log::debug!("Listed {} documents from '{}'", documents.len(), collection);
        Ok(documents)
    }

    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Fields>> {
        let request = self.client.get(self.document_url(collection, key));
        let response = self.authorize(request).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let raw: RawDocument = parse_json(&check_status(response)?.text().await?)?;
        Ok(Some(decode_fields(raw.fields)))
    }

    async fn put(&self, collection: &str, key: &str, fields: &Fields) -> StoreResult<()> {
        // PATCH without an update mask replaces every field and upserts
        let body = encode_fields(fields);
        let request = self.client.patch(self.document_url(collection, key)).json(&body);
        check_status(self.authorize(request).send().await?)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        let request = self.client.delete(self.document_url(collection, key));
        check_status(self.authorize(request).send().await?)?;
        Ok(())
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Drop the query so the API key never ends up in logs
    let mut url = response.url().clone();
    url.set_query(None);
    Err(StoreError::Status {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> StoreResult<T> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Document ID is the last segment of the resource name
fn key_from_name(name: &str) -> String {
    let id = name.rsplit('/').next().unwrap_or(name);
    percent_decode_str(id).decode_utf8_lossy().into_owned()
}

fn decode_document(raw: RawDocument) -> Document {
    Document {
        key: key_from_name(&raw.name),
        fields: decode_fields(raw.fields),
    }
}

fn decode_fields(raw: BTreeMap<String, Value>) -> Fields {
    raw.into_iter()
        .filter_map(|(name, value)| decode_value(&value).map(|v| (name, v)))
        .collect()
}

/// Decode one typed value; kinds this app does not use are skipped
fn decode_value(value: &Value) -> Option<FieldValue> {
    let object = value.as_object()?;
    if let Some(v) = object.get("integerValue") {
        // int64 travels as a decimal string
        return match v {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
        .map(FieldValue::Integer);
    }
    if let Some(v) = object.get("doubleValue") {
        return v.as_f64().map(FieldValue::Double);
    }
    if let Some(v) = object.get("stringValue") {
        return v.as_str().map(|s| FieldValue::String(s.to_string()));
    }
    if let Some(v) = object.get("booleanValue") {
        return v.as_bool().map(FieldValue::Boolean);
    }
    None
}

fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Integer(v) => json!({ "integerValue": v.to_string() }),
        FieldValue::Double(v) => json!({ "doubleValue": v }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Boolean(b) => json!({ "booleanValue": b }),
    }
}

fn encode_fields(fields: &Fields) -> WriteBody {
    WriteBody {
        fields: fields
            .iter()
            .map(|(name, value)| (name.clone(), encode_value(value)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FirestoreStore {
        FirestoreStore::new(
            "https://firestore.googleapis.com/v1/",
            "demo-project",
            "(default)",
            Some("secret".to_string()),
        )
    }

    #[test]
    fn test_document_url_encodes_key_as_one_segment() {
        let url = store().document_url("inventory", "apple pie/large");
        assert_eq!(
            url,
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents/inventory/apple%20pie%2Flarge"
        );
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let store = FirestoreStore::new("http://localhost:8080/v1", "p", "(default)", Some(String::new()));
        assert!(store.api_key.is_none());
    }

    #[test]
    fn test_decode_list_page() {
        let body = r#"{
            "documents": [
                {
                    "name": "projects/p/databases/(default)/documents/inventory/apple",
                    "fields": { "quantity": { "integerValue": "5" } },
                    "createTime": "2024-08-01T10:00:00Z"
                },
                {
                    "name": "projects/p/databases/(default)/documents/inventory/Green%20tea",
                    "fields": {
                        "quantity": { "integerValue": "2" },
                        "note": { "stringValue": "loose leaf" },
                        "updatedAt": { "timestampValue": "2024-08-01T10:00:00Z" }
                    }
                }
            ],
            "nextPageToken": "abc"
        }"#;

        let page: ListPage = parse_json(body).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));

        let docs: Vec<Document> = page.documents.into_iter().map(decode_document).collect();
        assert_eq!(docs[0].key, "apple");
        assert_eq!(docs[0].fields["quantity"], FieldValue::Integer(5));
        assert_eq!(docs[1].key, "Green tea");
        assert_eq!(docs[1].fields.len(), 2);
        assert_eq!(docs[1].fields["note"], FieldValue::String("loose leaf".to_string()));
    }

    #[test]
    fn test_decode_empty_collection() {
        let page: ListPage = parse_json("{}").unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result: StoreResult<ListPage> = parse_json("<html>oops</html>");
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_encode_fields() {
        let mut fields = Fields::new();
        fields.insert("quantity".to_string(), FieldValue::Integer(42));
        fields.insert("fragile".to_string(), FieldValue::Boolean(true));

        let body = serde_json::to_value(encode_fields(&fields)).unwrap();
        assert_eq!(
            body,
            json!({
                "fields": {
                    "fragile": { "booleanValue": true },
                    "quantity": { "integerValue": "42" }
                }
            })
        );
    }

    #[test]
    fn test_value_codec_round_trip() {
        for value in [
            FieldValue::Integer(-7),
            FieldValue::Double(1.5),
            FieldValue::String("x".to_string()),
            FieldValue::Boolean(false),
        ] {
            assert_eq!(decode_value(&encode_value(&value)), Some(value));
        }
    }
}
