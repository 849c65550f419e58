//! Unit tests for the service listing step

#[cfg(test)]
mod tests {
    use crate::error::ControllerError;
    use crate::fetch_services;
    use cloudrun_client::{make_service, LabelSelector, MockCloudRunClient};

    #[tokio::test]
    async fn test_fetch_services_scopes_to_region_and_selector() {
        let client = MockCloudRunClient::new("http://cloudrun.test");
        client.add_service(make_service(
            "p",
            "europe-west1",
            "frontend",
            &[("app", "frontend")],
        ));
        client.add_service(make_service(
            "p",
            "europe-west1",
            "worker",
            &[("app", "worker")],
        ));
        client.add_service(make_service(
            "p",
            "us-central1",
            "frontend",
            &[("app", "frontend")],
        ));

        let selector: LabelSelector = "app=frontend".parse().unwrap();
        let services = fetch_services(&client, "p", "europe-west1", Some(&selector))
            .await
            .unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(
            services[0].name,
            "projects/p/locations/europe-west1/services/frontend"
        );
    }

    #[tokio::test]
    async fn test_fetch_services_without_selector_returns_everything_in_region() {
        let client = MockCloudRunClient::new("http://cloudrun.test");
        client.add_service(make_service("p", "europe-west1", "frontend", &[]));
        client.add_service(make_service("p", "europe-west1", "worker", &[]));

        let services = fetch_services(&client, "p", "europe-west1", None).await.unwrap();
        assert_eq!(services.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_services_propagates_api_errors() {
        let client = MockCloudRunClient::new("http://cloudrun.test");
        client.fail_with("permission denied on run.services.list");

        let err = fetch_services(&client, "p", "europe-west1", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ControllerError::CloudRun(_)), "got {:?}", err);
        assert!(err.to_string().contains("permission denied"));
    }
}
