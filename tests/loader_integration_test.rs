use httpmock::prelude::*;
use recipe_loader::domain::ports::RecipeStore;
use recipe_loader::{
    FileStore, HttpFetcher, Recipe, RecipeCollection, RecipeError, RecipeLoader, SourceList,
    CACHE_KEY,
};
use serde_json::json;
use tempfile::TempDir;

fn recipe_doc(i: usize) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": format!("Recipe {}", i),
        "recipeYield": i * 2,
    })
}

#[tokio::test]
async fn test_cold_load_fetches_all_sources_in_order_and_caches() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let mocks: Vec<_> = (1..=6)
        .map(|i| {
            server.mock(|when, then| {
                when.method(GET).path(format!("/json/{}.json", i));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(recipe_doc(i));
            })
        })
        .collect();

    let sources = SourceList::new((1..=6).map(|i| server.url(format!("/json/{}.json", i))).collect());
    let store = FileStore::new(temp_dir.path());
    let loader = RecipeLoader::new(store.clone(), HttpFetcher::new(), sources);

    let recipes = loader.load().await.unwrap();

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(recipes.len(), 6);
    for (i, recipe) in recipes.iter().enumerate() {
        assert_eq!(recipe, &Recipe::new(recipe_doc(i + 1)));
    }

    // The cache entry is a plain JSON array of the same records.
    let stored = std::fs::read_to_string(store.path_for(CACHE_KEY)).unwrap();
    let round_trip: RecipeCollection = serde_json::from_str(&stored).unwrap();
    assert_eq!(round_trip, recipes);
}

#[tokio::test]
async fn test_warm_cache_skips_network_and_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/recipe.json");
        then.status(200).json_body(json!({"name": "Cornbread Stuffing"}));
    });

    let store = FileStore::new(temp_dir.path());
    let loader = RecipeLoader::new(
        store,
        HttpFetcher::new(),
        SourceList::new(vec![server.url("/recipe.json")]),
    );

    let cold = loader.load().await.unwrap();
    let warm_first = loader.load().await.unwrap();
    let warm_second = loader.load().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(cold, warm_first);
    assert_eq!(
        serde_json::to_vec(&warm_first).unwrap(),
        serde_json::to_vec(&warm_second).unwrap()
    );
}

#[tokio::test]
async fn test_prepopulated_cache_is_returned_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path());
    store
        .set(CACHE_KEY, r#"[{"name":"One Pot Dinner","steps":["a","b"]},{"name":"Side"}]"#)
        .await
        .unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({}));
    });

    let loader = RecipeLoader::new(
        store,
        HttpFetcher::new(),
        SourceList::new(vec![server.url("/never.json")]),
    );
    let recipes = loader.load().await.unwrap();

    mock.assert_hits(0);
    assert_eq!(
        recipes,
        vec![
            Recipe::new(json!({"name": "One Pot Dinner", "steps": ["a", "b"]})),
            Recipe::new(json!({"name": "Side"})),
        ]
    );
}

#[tokio::test]
async fn test_server_error_aborts_load_without_cache_write() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ok.json");
        then.status(200).json_body(json!({"name": "ok"}));
    });
    let failing = server.mock(|when, then| {
        when.method(GET).path("/failed.json");
        then.status(500);
    });

    let store = FileStore::new(temp_dir.path());
    let loader = RecipeLoader::new(
        store.clone(),
        HttpFetcher::new(),
        SourceList::new(vec![server.url("/ok.json"), server.url("/failed.json")]),
    );

    let err = loader.load().await.unwrap_err();

    failing.assert();
    assert!(matches!(err, RecipeError::LoadError(_)));
    assert!(matches!(err.cause(), RecipeError::NetworkError { .. }));
    assert!(store.get(CACHE_KEY).await.unwrap().is_none());
    assert!(!store.path_for(CACHE_KEY).exists());
}

#[tokio::test]
async fn test_invalid_json_body_aborts_load_without_cache_write() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"name\": \"unterminated");
    });

    let store = FileStore::new(temp_dir.path());
    let loader = RecipeLoader::new(
        store.clone(),
        HttpFetcher::new(),
        SourceList::new(vec![server.url("/broken.json")]),
    );

    let err = loader.load().await.unwrap_err();

    assert!(err.is_load_error());
    match err.cause() {
        RecipeError::ParseError { origin, .. } => assert!(origin.ends_with("/broken.json")),
        other => panic!("unexpected cause: {:?}", other),
    }
    assert!(store.get(CACHE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_load_leaves_cache_cold_for_next_attempt() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mut outage = server.mock(|when, then| {
        when.method(GET).path("/recipe.json");
        then.status(503);
    });

    let loader = RecipeLoader::new(
        FileStore::new(temp_dir.path()),
        HttpFetcher::new(),
        SourceList::new(vec![server.url("/recipe.json")]),
    );
    assert!(loader.load().await.is_err());

    outage.delete();
    server.mock(|when, then| {
        when.method(GET).path("/recipe.json");
        then.status(200).json_body(json!({"name": "Recovered"}));
    });

    let recipes = loader.load().await.unwrap();
    assert_eq!(recipes, vec![Recipe::new(json!({"name": "Recovered"}))]);
}
