use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/tickets/{id}",
            get(handlers::get_ticket)
                .put(handlers::update_ticket)
                .delete(handlers::delete_ticket),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::tickets::dtos::{TicketPageDto, TicketResponseDto};
    use crate::shared::test_helpers::{memory_ticket_service, ticket_test_server};

    async fn create(server: &TestServer, user: &str, status: &str) -> TicketResponseDto {
        let response = server
            .post("/tickets")
            .json(&json!({ "user": user, "status": status }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<TicketResponseDto>()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server
            .post("/tickets")
            .json(&json!({ "user": "bob", "status": "New" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let ticket = response.json::<TicketResponseDto>();
        assert_ne!(ticket.id, 0);
        assert_eq!(ticket.user, "bob");
        assert_eq!(ticket.status, "New");
        assert_eq!(
            response.header("location"),
            format!("/tickets/{}", ticket.id).as_str()
        );

        let body = response.json::<Value>();
        assert!(body.get("createdAt").is_some());
        assert!(body.get("updatedAt").is_some());
    }

    #[tokio::test]
    async fn test_location_points_at_get() {
        let server = ticket_test_server(memory_ticket_service());
        let created = server
            .post("/tickets")
            .json(&json!({ "user": "alice", "status": "Open" }))
            .await;
        let location = created.header("location");

        let fetched = server.get(location.to_str().unwrap()).await;

        fetched.assert_status_ok();
        assert_eq!(
            fetched.json::<TicketResponseDto>(),
            created.json::<TicketResponseDto>()
        );
    }

    #[tokio::test]
    async fn test_create_missing_field_is_400() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server
            .post("/tickets")
            .json(&json!({ "user": "bob" }))
            .expect_failure()
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_empty_field_is_400_naming_field() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server
            .post("/tickets")
            .json(&json!({ "user": "bob", "status": "" }))
            .expect_failure()
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["errors"], json!(["status: must not be empty"]));
    }

    #[tokio::test]
    async fn test_get_unknown_is_404_with_empty_body() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server.get("/tickets/9999").expect_failure().await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_update_returns_new_values() {
        let server = ticket_test_server(memory_ticket_service());
        let created = create(&server, "carol", "New").await;

        let response = server
            .put(&format!("/tickets/{}", created.id))
            .json(&json!({ "user": "carol-updated", "status": "Closed" }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<TicketResponseDto>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user, "carol-updated");
        assert_eq!(updated.status, "Closed");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_is_404() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server
            .put("/tickets/12")
            .json(&json!({ "user": "x", "status": "y" }))
            .expect_failure()
            .await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_and_delete_again() {
        let server = ticket_test_server(memory_ticket_service());
        let created = create(&server, "dave", "New").await;
        let path = format!("/tickets/{}", created.id);

        let response = server.delete(&path).await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        server
            .get(&path)
            .expect_failure()
            .await
            .assert_status_not_found();
        server
            .delete(&path)
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_envelope_and_paging() {
        let server = ticket_test_server(memory_ticket_service());
        for i in 0..12 {
            create(&server, &format!("user-{}", i), "New").await;
        }

        let response = server
            .get("/tickets")
            .add_query_param("page", 2)
            .add_query_param("pageSize", 5)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["total"], 12);
        assert_eq!(body["page"], 2);
        assert_eq!(body["pageSize"], 5);
        assert_eq!(body["data"].as_array().unwrap().len(), 5);

        let last = server
            .get("/tickets")
            .add_query_param("page", 3)
            .add_query_param("pageSize", 5)
            .await
            .json::<TicketPageDto>();
        assert_eq!(last.data.len(), 2);

        let beyond = server
            .get("/tickets")
            .add_query_param("page", 9)
            .add_query_param("pageSize", 5)
            .await
            .json::<TicketPageDto>();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.total, 12);
    }

    #[tokio::test]
    async fn test_list_defaults_and_clamping() {
        let server = ticket_test_server(memory_ticket_service());
        create(&server, "erin", "New").await;

        let defaults = server.get("/tickets").await.json::<TicketPageDto>();
        assert_eq!(defaults.page, 1);
        assert_eq!(defaults.page_size, 10);

        let clamped = server
            .get("/tickets")
            .add_query_param("page", -1)
            .add_query_param("pageSize", 500)
            .await
            .json::<TicketPageDto>();
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.page_size, 100);
        assert_eq!(clamped.data.len(), 1);
    }

    #[tokio::test]
    async fn test_list_rejects_non_numeric_page() {
        let server = ticket_test_server(memory_ticket_service());

        let response = server
            .get("/tickets")
            .add_query_param("page", "two")
            .expect_failure()
            .await;

        response.assert_status_bad_request();
    }
}
