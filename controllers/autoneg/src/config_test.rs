//! Unit tests for configuration parsing

#[cfg(test)]
mod tests {
    use crate::config::{http_addr_from_port, Config};
    use clap::Parser;
    use tracing::Level;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["autoneg-controller"]).unwrap();
        assert_eq!(config.verbosity, Level::INFO);
        assert_eq!(config.region, "europe-west1");
        assert!(config.project.is_none());
        assert!(config.label_selector.is_none());
    }

    #[test]
    fn test_http_addr_derived_from_port() {
        assert_eq!(http_addr_from_port(Some("9090".to_string())), ":9090");
        assert_eq!(http_addr_from_port(None), ":8080");
        // An empty PORT behaves as unset
        assert_eq!(http_addr_from_port(Some(String::new())), ":8080");
    }

    #[test]
    fn test_explicit_http_addr_wins() {
        let config =
            Config::try_parse_from(["autoneg-controller", "--http-addr", ":9999"]).unwrap();
        assert_eq!(config.http_addr, ":9999");
    }

    #[test]
    fn test_verbosity_parses_known_levels() {
        let config =
            Config::try_parse_from(["autoneg-controller", "--verbosity", "debug"]).unwrap();
        assert_eq!(config.verbosity, Level::DEBUG);
    }

    #[test]
    fn test_invalid_verbosity_is_fatal_at_parse_time() {
        let err =
            Config::try_parse_from(["autoneg-controller", "--verbosity", "chatty"]).unwrap_err();
        assert!(err.to_string().contains("unknown logging level"));
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Config::try_parse_from(["autoneg-controller", "leftover"]).is_err());
    }

    #[test]
    fn test_label_selector_is_validated() {
        let config = Config::try_parse_from([
            "autoneg-controller",
            "--label-selector",
            "app=frontend,env=prod",
        ])
        .unwrap();
        assert!(config.label_selector.is_some());

        let err = Config::try_parse_from(["autoneg-controller", "--label-selector", "frontend"])
            .unwrap_err();
        assert!(err.to_string().contains("Invalid label selector"));
    }

    #[test]
    fn test_empty_project_flag_triggers_autodetection() {
        let config = Config::try_parse_from(["autoneg-controller", "--project", ""]).unwrap();
        assert!(config.explicit_project().is_none());

        let config =
            Config::try_parse_from(["autoneg-controller", "--project", "proj-a"]).unwrap();
        assert_eq!(config.explicit_project(), Some("proj-a"));
    }
}
