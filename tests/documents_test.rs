//! Document CRUD integration tests for document-api.
//!
//! Each test runs against its own freshly migrated and seeded schema, so
//! the five seed rows (ids 1-5) are the baseline state everywhere.

mod common;

use common::TestApp;
use document_api::models::Document;
use serde_json::json;

fn seed_documents() -> Vec<Document> {
    (1..=5)
        .map(|n| Document {
            id: n,
            title: format!("Document {}", n),
            content: None,
            status: None,
            author: format!("Author of Document {}", n),
        })
        .collect()
}

#[tokio::test]
async fn listing_a_fresh_store_returns_the_seed_documents() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .get(format!("{}/documents", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let documents: Vec<Document> = response.json().await.expect("Failed to parse response");
    assert_eq!(documents, seed_documents());

    app.cleanup().await;
}

#[tokio::test]
async fn null_valued_fields_are_omitted_from_responses() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .get(format!("{}/documents/1", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Document 1");
    assert_eq!(body["author"], "Author of Document 1");
    assert!(body.get("content").is_none());
    assert!(body.get("status").is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn getting_a_missing_document_returns_404() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .get(format!("{}/documents/4242", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    app.cleanup().await;
}

#[tokio::test]
async fn creating_then_getting_a_document_round_trips() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .post(format!("{}/documents", app.address))
        .json(&json!({
            "title": "Release notes",
            "author": "Docs team",
            "content": "Initial draft",
            "status": "draft"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 201);

    let location = response
        .headers()
        .get("location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let created: Document = response.json().await.expect("Failed to parse response");
    assert_eq!(location, format!("/documents/{}", created.id));
    assert_eq!(created.title, "Release notes");
    assert_eq!(created.author, "Docs team");
    assert_eq!(created.content.as_deref(), Some("Initial draft"));
    assert_eq!(created.status.as_deref(), Some("draft"));

    let fetched: Document = client
        .get(format!("{}{}", app.address, location))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(fetched, created);

    app.cleanup().await;
}

#[tokio::test]
async fn the_store_assigns_ids_and_ignores_client_supplied_ones() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .post(format!("{}/documents", app.address))
        .json(&json!({
            "id": 999,
            "title": "Ignored id",
            "author": "Somebody"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 201);

    // The seed rows occupy ids 1-5, so the first insert gets id 6.
    let created: Document = response.json().await.expect("Failed to parse response");
    assert_eq!(created.id, 6);

    app.cleanup().await;
}

#[tokio::test]
async fn creating_without_required_fields_returns_400() {
    let app = TestApp::spawn().await;
    let client = app.client();

    // Missing author
    let response = client
        .post(format!("{}/documents", app.address))
        .json(&json!({ "title": "No author" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 400);

    // Empty title
    let response = client
        .post(format!("{}/documents", app.address))
        .json(&json!({ "title": "", "author": "Somebody" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 400);

    // Nothing slipped into the store
    let documents: Vec<Document> = client
        .get(format!("{}/documents", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(documents, seed_documents());

    app.cleanup().await;
}

#[tokio::test]
async fn pascal_case_properties_are_accepted() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .post(format!("{}/documents", app.address))
        .json(&json!({
            "Title": "Legacy client",
            "Author": "Old integration",
            "Status": "imported"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 201);

    let created: Document = response.json().await.expect("Failed to parse response");
    assert_eq!(created.title, "Legacy client");
    assert_eq!(created.author, "Old integration");
    assert_eq!(created.status.as_deref(), Some("imported"));

    app.cleanup().await;
}

#[tokio::test]
async fn updating_overwrites_every_field() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .put(format!("{}/documents/1", app.address))
        .json(&json!({
            "id": 1,
            "title": "Document 1 (revised)",
            "author": "New author",
            "content": "Now with content",
            "status": "published"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let updated: Document = response.json().await.expect("Failed to parse response");
    assert_eq!(updated.title, "Document 1 (revised)");
    assert_eq!(updated.content.as_deref(), Some("Now with content"));
    assert_eq!(updated.status.as_deref(), Some("published"));

    // A second replace without the optional fields clears them.
    let response = client
        .put(format!("{}/documents/1", app.address))
        .json(&json!({
            "id": 1,
            "title": "Document 1 (revised)",
            "author": "New author"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let fetched: Document = client
        .get(format!("{}/documents/1", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(fetched.content, None);
    assert_eq!(fetched.status, None);

    app.cleanup().await;
}

#[tokio::test]
async fn updating_with_a_mismatched_id_returns_400_and_leaves_the_store_unmodified() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .put(format!("{}/documents/1", app.address))
        .json(&json!({
            "id": 2,
            "title": "Hijacked",
            "author": "Wrong id"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);

    // A body without an id is a mismatch as well.
    let response = client
        .put(format!("{}/documents/1", app.address))
        .json(&json!({
            "title": "Hijacked",
            "author": "No id"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);

    let documents: Vec<Document> = client
        .get(format!("{}/documents", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(documents, seed_documents());

    app.cleanup().await;
}

#[tokio::test]
async fn updating_a_missing_document_returns_404() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .put(format!("{}/documents/4242", app.address))
        .json(&json!({
            "id": 4242,
            "title": "Ghost",
            "author": "Nobody"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    app.cleanup().await;
}

#[tokio::test]
async fn deleting_then_getting_a_document_returns_404() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .delete(format!("{}/documents/2", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/documents/2", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 404);

    app.cleanup().await;
}

#[tokio::test]
async fn deleting_a_missing_document_still_returns_204() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .delete(format!("{}/documents/4242", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 204);

    // No state change
    let documents: Vec<Document> = client
        .get(format!("{}/documents", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(documents, seed_documents());

    app.cleanup().await;
}

#[tokio::test]
async fn listing_reflects_creates_and_deletes() {
    let app = TestApp::spawn().await;
    let client = app.client();

    for n in 1..=2 {
        let response = client
            .post(format!("{}/documents", app.address))
            .json(&json!({
                "title": format!("Extra {}", n),
                "author": format!("Author {}", n)
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);
    }

    // Drop one seeded row and one created row.
    for id in [3, 6] {
        let response = client
            .delete(format!("{}/documents/{}", app.address, id))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 204);
    }

    let documents: Vec<Document> = client
        .get(format!("{}/documents", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let ids: Vec<i32> = documents.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 7]);

    app.cleanup().await;
}
