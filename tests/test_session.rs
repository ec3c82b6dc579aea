use mockito::Matcher;
use plateful::storage::MemoryStore;
use plateful::{AppConfig, Session};

fn config_for(server: &mockito::ServerGuard) -> AppConfig {
    AppConfig {
        api_base_url: server.url(),
        timeout: 5,
        results_per_page: 2,
        data_dir: String::new(),
    }
}

fn search_body() -> String {
    r#"{
        "count": 3,
        "recipes": [
            {"recipe_id": "r1", "title": "Pizza Margherita", "publisher": "Rosa", "image_url": "https://example.com/r1.jpg", "source_url": "https://example.com/r1"},
            {"recipe_id": "r2", "title": "Pizza Bianca", "publisher": "Rosa", "image_url": "https://example.com/r2.jpg", "source_url": "https://example.com/r2"},
            {"recipe_id": "r3", "title": "Calzone", "publisher": "Marco", "image_url": "https://example.com/r3.jpg", "source_url": "https://example.com/r3"}
        ]
    }"#
    .to_string()
}

fn recipe_body() -> String {
    r#"{
        "recipe": {
            "recipe_id": "r1",
            "title": "Pizza Margherita",
            "publisher": "Rosa",
            "image_url": "https://example.com/r1.jpg",
            "source_url": "https://example.com/r1",
            "ingredients": [
                "2 cups flour",
                "1 teaspoon salt",
                "½ cup water",
                "8 ounces mozzarella"
            ]
        }
    }"#
    .to_string()
}

#[tokio::test]
async fn test_search_populates_session_and_pages() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "pizza".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    session.run_search("pizza").await.unwrap();

    let search = session.search().unwrap();
    assert_eq!(search.query, "pizza");
    assert_eq!(search.results.len(), 3);
    assert_eq!(search.num_pages(), 2);
    assert_eq!(search.page(1).len(), 2);
    assert_eq!(search.page(2).len(), 1);
    assert_eq!(search.page(2)[0].title, "Calzone");
    assert!(search.page(3).is_empty());
}

#[tokio::test]
async fn test_failed_search_leaves_state_unset() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    assert!(session.run_search("pizza").await.is_err());
    assert!(session.search().is_none());
}

#[tokio::test]
async fn test_open_recipe_parses_and_derives() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::UrlEncoded("rId".into(), "r1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipe_body())
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    session.open_recipe("r1").await.unwrap();

    let recipe = session.recipe().unwrap();
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.cook_time, 30); // 4 ingredients, ceil(4/3)*15
    assert_eq!(recipe.ingredients.len(), 4);
    assert_eq!(recipe.ingredients[1].unit, "tsp");
    assert_eq!(recipe.ingredients[2].count, Some(0.5));
    assert_eq!(recipe.ingredients[3].unit, "oz");
}

#[tokio::test]
async fn test_adjust_servings_scales_current_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipe_body())
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    session.open_recipe("r1").await.unwrap();

    session.adjust_servings(8).unwrap();
    let recipe = session.recipe().unwrap();
    assert_eq!(recipe.servings, 8);
    assert_eq!(recipe.ingredients[0].count, Some(4.0));

    assert!(session.adjust_servings(0).is_err());
    assert_eq!(session.recipe().unwrap().servings, 8);
}

#[tokio::test]
async fn test_add_recipe_to_list_copies_scaled_counts() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipe_body())
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    session.open_recipe("r1").await.unwrap();
    session.adjust_servings(8).unwrap();

    let added = session.add_recipe_to_list();
    assert_eq!(added.len(), 4);
    let list = session.shopping_list().unwrap();
    assert_eq!(list.items()[0].count, Some(4.0));

    // List items have their own lifecycle: rescaling the recipe afterwards
    // must not touch them.
    session.adjust_servings(4).unwrap();
    assert_eq!(session.shopping_list().unwrap().items()[0].count, Some(4.0));
}

#[tokio::test]
async fn test_toggle_like_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipe_body())
        .create();

    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();
    session.open_recipe("r1").await.unwrap();

    assert!(session.toggle_like().unwrap());
    assert!(session.likes().is_liked("r1"));
    assert_eq!(session.likes().num_likes(), 1);

    assert!(!session.toggle_like().unwrap());
    assert!(!session.likes().is_liked("r1"));
    assert_eq!(session.likes().num_likes(), 0);
}

#[tokio::test]
async fn test_stale_fetch_completion_is_discarded() {
    let server = mockito::Server::new_async().await;
    let mut session = Session::new(&config_for(&server), Box::new(MemoryStore::new())).unwrap();

    // A second fetch starts before the first one completes; the first
    // completion must not clobber the newer state.
    let stale = session.begin_fetch();
    let current = session.begin_fetch();

    assert!(session
        .finish_search(stale, "old query".to_string(), Vec::new())
        .is_none());
    assert!(session.search().is_none());

    assert!(session
        .finish_search(current, "new query".to_string(), Vec::new())
        .is_some());
    assert_eq!(session.search().unwrap().query, "new query");
}
