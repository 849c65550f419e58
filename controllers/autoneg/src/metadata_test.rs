//! Unit tests for the compute metadata client

#[cfg(test)]
mod tests {
    use crate::metadata::{MetadataClient, MetadataError};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_on_gce_true_when_flavor_header_returned() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/").header("Metadata-Flavor", "Google");
            then.status(200)
                .header("Metadata-Flavor", "Google")
                .body("computeMetadata/");
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        assert!(client.on_gce().await);
    }

    #[tokio::test]
    async fn test_on_gce_false_without_flavor_header() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("not a metadata server");
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        assert!(!client.on_gce().await);
    }

    #[tokio::test]
    async fn test_on_gce_false_when_unreachable() {
        let client = MetadataClient::with_base_url("http://127.0.0.1:1").unwrap();
        assert!(!client.on_gce().await);
    }

    #[tokio::test]
    async fn test_project_id_trims_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/computeMetadata/v1/project/project-id")
                .header("Metadata-Flavor", "Google");
            then.status(200).body("proj-a\n");
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        assert_eq!(client.project_id().await.unwrap(), "proj-a");
    }

    #[tokio::test]
    async fn test_project_id_error_carries_status_and_path() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/computeMetadata/v1/project/project-id");
            then.status(404).body("not found");
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        let err = client.project_id().await.unwrap_err();

        assert!(matches!(err, MetadataError::Api { .. }));
        let message = err.to_string();
        assert!(message.contains("404"), "missing status: {}", message);
        assert!(message.contains("project-id"), "missing path: {}", message);
    }

    #[tokio::test]
    async fn test_access_token_decodes() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/computeMetadata/v1/instance/service-accounts/default/token")
                .header("Metadata-Flavor", "Google");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"access_token":"ya29.mint","expires_in":3599,"token_type":"Bearer"}"#);
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        let token = client.access_token().await.unwrap();
        assert_eq!(token.access_token, "ya29.mint");
        assert_eq!(token.expires_in, Some(3599));
    }

    #[tokio::test]
    async fn test_access_token_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/computeMetadata/v1/instance/service-accounts/default/token");
            then.status(200).body("not json");
        });

        let client = MetadataClient::with_base_url(server.base_url()).unwrap();
        let err = client.access_token().await.unwrap_err();
        assert!(matches!(err, MetadataError::Decode { .. }));
    }
}
