#[cfg(test)]
mod integration_tests {
    use crate::{
        default_viewports, parse_url_lines, read_urls, sanitize_url, Config, RunSummary,
        RunTimestamp, ScreenshotOrchestrator, SweepError,
    };
    use std::io::Write;
    use std::path::PathBuf;

    fn fixed_timestamp() -> RunTimestamp {
        RunTimestamp::from_datetime(
            chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(7, 8, 9)
                .unwrap(),
        )
    }

    #[test]
    fn test_sanitized_fragment_scenarios() {
        assert_eq!(sanitize_url("https://www.example.com/path/"), "example.com-path");
        assert_eq!(sanitize_url("http://example.com"), "example.com");
    }

    #[test]
    fn test_run_timestamp_scenario() {
        assert_eq!(fixed_timestamp().as_str(), "20240305-070809");
    }

    #[test]
    fn test_catalog_cross_product_size() {
        let urls = parse_url_lines("https://a.example\nhttps://b.example\nhttps://c.example\n");
        assert_eq!(urls.len() * default_viewports().len(), 12);
    }

    #[tokio::test]
    async fn test_dry_run_pipeline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let urls_path = dir.path().join("urls");
        let mut file = std::fs::File::create(&urls_path).unwrap();
        writeln!(file, "https://www.example.com/path/").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "# a comment").unwrap();
        writeln!(file, "http://example.com").unwrap();
        drop(file);

        let config = Config {
            input_path: urls_path.clone(),
            output_root: dir.path().join("screenshots"),
            dry_run: true,
            ..Default::default()
        };

        let urls = read_urls(&config.input_path).await.unwrap();
        assert_eq!(urls.len(), 2);

        let orchestrator =
            ScreenshotOrchestrator::new(config.clone(), fixed_timestamp(), None);
        let summary = orchestrator.run(&urls).await.unwrap();

        assert_eq!(
            summary,
            RunSummary {
                captured: 0,
                failed: 0,
                planned: 8,
            }
        );

        // All computed paths share the one run directory.
        let expected_dir = config.output_root.join("20240305-070809");
        for url in &urls {
            for viewport in &config.viewports {
                let path = orchestrator.output_path(url, viewport);
                assert_eq!(path.parent().unwrap(), expected_dir);
                assert!(path
                    .file_name()
                    .unwrap()
                    .to_str()
                    .unwrap()
                    .ends_with(&format!("-{}x{}.png", viewport.width, viewport.height)));
            }
        }
    }

    #[tokio::test]
    async fn test_missing_input_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(&dir.path().join("urls")).await.unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, SweepError::InputNotFound(_)));
    }

    #[test]
    fn test_scheme_prefix_never_survives_sanitization() {
        let inputs = [
            "http://example.com",
            "https://example.com",
            "https://www.example.com",
            "http://abc.example.com/long/path/here",
        ];
        for input in inputs {
            let sanitized = sanitize_url(input);
            assert!(!sanitized.starts_with("http"));
            assert!(!sanitized.contains('/'));
            assert!(!sanitized.ends_with('-'));
        }
    }

    #[test]
    fn test_output_paths_differ_only_in_dimension_suffix() {
        let orchestrator = ScreenshotOrchestrator::new(
            Config {
                dry_run: true,
                ..Default::default()
            },
            fixed_timestamp(),
            None,
        );

        let paths: Vec<PathBuf> = default_viewports()
            .iter()
            .map(|v| orchestrator.output_path("https://example.com", v))
            .collect();

        let stems: Vec<String> = paths
            .iter()
            .map(|p| {
                let name = p.file_name().unwrap().to_str().unwrap();
                // Strip the -{width}x{height}.png suffix.
                name[..name.rfind('-').unwrap()].to_string()
            })
            .collect();

        assert!(stems.iter().all(|s| s == "example.com"));
    }
}
