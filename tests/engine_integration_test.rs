use httpmock::prelude::*;
use recipe_loader::domain::ports::ConfigProvider;
use recipe_loader::{build_engine, run_to_file, TomlConfig, CACHE_KEY};
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &TempDir, sources: &[String], offline: bool) -> TomlConfig {
    let list = sources
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    let root = dir.path().display();
    let toml_content = format!(
        r#"
[loader]
sources = [{list}]
cache_dir = "{root}/cache"

[render]
output_path = "{root}/public/index.html"

[offline]
enabled = {offline}
site_root = "{root}"
worker_script = "./sw.js"
"#
    );
    let path = dir.path().join("recipes.toml");
    std::fs::write(&path, toml_content).unwrap();
    TomlConfig::from_file(&path).unwrap()
}

#[tokio::test]
async fn test_end_to_end_renders_page_and_caches() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("sw.js"), "// offline worker").unwrap();

    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/1.json");
        then.status(200).json_body(json!({"name": "Turkey"}));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/2.json");
        then.status(200).json_body(json!({"name": "Stuffing"}));
    });

    let config = write_config(
        &temp_dir,
        &[server.url("/1.json"), server.url("/2.json")],
        true,
    );
    let engine = build_engine(&config).unwrap();

    let report = run_to_file(&engine, &config, "Recipes").await.unwrap();

    first.assert();
    second.assert();
    assert_eq!(report.worker_scope.as_deref(), Some("./"));
    assert_eq!(report.recipes_rendered, 2);
    assert!(!report.load_failed);

    let html = std::fs::read_to_string(config.output_path()).unwrap();
    assert_eq!(html.matches("<recipe-card").count(), 2);
    assert!(html.find("Turkey").unwrap() < html.find("Stuffing").unwrap());

    let cache_file = config.cache_dir().join(format!("{}.json", CACHE_KEY));
    assert!(cache_file.exists());

    // Second run is served from the cache.
    let report = run_to_file(&engine, &config, "Recipes").await.unwrap();
    assert_eq!(report.recipes_rendered, 2);
    first.assert_hits(1);
    second.assert_hits(1);
}

#[tokio::test]
async fn test_end_to_end_with_failing_source_writes_empty_page() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/1.json");
        then.status(200).json_body(json!({"name": "Turkey"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/2.json");
        then.status(404);
    });

    let config = write_config(
        &temp_dir,
        &[server.url("/1.json"), server.url("/2.json")],
        false,
    );
    let engine = build_engine(&config).unwrap();

    let report = run_to_file(&engine, &config, "Recipes").await.unwrap();

    assert!(report.load_failed);
    assert_eq!(report.worker_scope, None);
    assert_eq!(report.recipes_rendered, 0);

    let html = std::fs::read_to_string(config.output_path()).unwrap();
    assert!(!html.contains("<recipe-card"));
    assert!(!config.cache_dir().join(format!("{}.json", CACHE_KEY)).exists());
}

#[tokio::test]
async fn test_missing_worker_script_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/1.json");
        then.status(200).json_body(json!({"name": "Turkey"}));
    });

    let config = write_config(&temp_dir, &[server.url("/1.json")], true);
    let engine = build_engine(&config).unwrap();

    let report = run_to_file(&engine, &config, "Recipes").await.unwrap();

    assert_eq!(report.worker_scope, None);
    assert_eq!(report.recipes_rendered, 1);
}
