//! Contact Service - Application service for phonebook entries
//!
//! This service provides use case implementations for listing, creating,
//! updating, and deleting contacts against the remote store. It abstracts
//! away the HTTP client details from the presentation layer.

use wirebook_domain::{Contact, ContactId};

use crate::application::dto::NewContactData;
use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

const PERSONS_PATH: &str = "/persons";

/// Contact service for managing phonebook entries.
///
/// Generic over the typed [`ApiPort`] so tests can drive it with a
/// recording port instead of a live HTTP client.
#[derive(Clone)]
pub struct ContactService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ContactService<A> {
    /// Create a new ContactService with the given API port
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch every contact from the remote store (the startup refresh).
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        let contacts = self.api.get(PERSONS_PATH).await?;
        Ok(contacts)
    }

    /// Create a new contact. The store assigns the id and echoes the record.
    pub async fn create_contact(
        &self,
        name: &str,
        number: &str,
    ) -> Result<Contact, ServiceError> {
        let payload = NewContactData::new(name, number);
        let created = self.api.post(PERSONS_PATH, &payload).await?;
        Ok(created)
    }

    /// Replace an existing contact's number.
    ///
    /// Sends the full updated record, as the store expects a whole-resource
    /// PUT. Fails with a not-found service error when the record was already
    /// deleted server-side.
    pub async fn update_number(
        &self,
        existing: &Contact,
        new_number: &str,
    ) -> Result<Contact, ServiceError> {
        let payload = existing.with_number(new_number);
        let path = format!("{}/{}", PERSONS_PATH, existing.id);
        let updated = self.api.put(&path, &payload).await?;
        Ok(updated)
    }

    /// Delete a contact by id.
    pub async fn delete_contact(&self, id: &ContactId) -> Result<(), ServiceError> {
        let path = format!("{}/{}", PERSONS_PATH, id);
        self.api.delete(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::infrastructure::testing::RecordingApiPort;
    use crate::ports::outbound::ApiError;
    use serde_json::json;
    use std::sync::Arc;

    fn service_over(raw: &RecordingApiPort) -> ContactService<Api> {
        ContactService::new(Api::new(Arc::new(raw.clone())))
    }

    #[tokio::test]
    async fn list_contacts_hits_the_collection_path() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!([
            { "id": "1", "name": "Arto Hellas", "number": "040-123456" },
            { "id": "2", "name": "Ada Lovelace", "number": "39-44-5323523" },
        ]));
        let svc = service_over(&raw);

        let contacts = svc.list_contacts().await.expect("list");
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Arto Hellas");

        let requests = raw.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/persons");
    }

    #[tokio::test]
    async fn create_contact_posts_name_and_number_without_id() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!({ "id": "7", "name": "Mary", "number": "39-23" }));
        let svc = service_over(&raw);

        let created = svc.create_contact("Mary", "39-23").await.expect("create");
        assert_eq!(created.id, ContactId::new("7"));

        let requests = raw.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/persons");
        assert_eq!(
            requests[0].body,
            Some(json!({ "name": "Mary", "number": "39-23" }))
        );
    }

    #[tokio::test]
    async fn update_number_puts_the_full_record() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!({ "id": "2", "name": "Ada Lovelace", "number": "044-999" }));
        let svc = service_over(&raw);
        let existing = Contact::new("2", "Ada Lovelace", "39-44-5323523");

        let updated = svc
            .update_number(&existing, "044-999")
            .await
            .expect("update");
        assert_eq!(updated.number, "044-999");

        let requests = raw.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/persons/2");
        assert_eq!(
            requests[0].body,
            Some(json!({ "id": "2", "name": "Ada Lovelace", "number": "044-999" }))
        );
    }

    #[tokio::test]
    async fn update_of_deleted_record_maps_to_not_found() {
        let raw = RecordingApiPort::new();
        raw.enqueue_err(ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        });
        let svc = service_over(&raw);
        let existing = Contact::new("9", "Ghost", "000");

        let err = svc
            .update_number(&existing, "111")
            .await
            .expect_err("stale record");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_contact_targets_the_record_path() {
        let raw = RecordingApiPort::new();
        let svc = service_over(&raw);

        svc.delete_contact(&ContactId::new("3")).await.expect("delete");

        let requests = raw.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/persons/3");
        assert_eq!(requests[0].body, None);
    }
}
