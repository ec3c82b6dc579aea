use std::env;

use plateful::storage::FileStore;
use plateful::{format_count, AppConfig, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the search query (and optional recipe id) from the command line
    let args: Vec<String> = env::args().collect();
    let query = args
        .get(1)
        .ok_or("Please provide a search query as an argument")?;

    let config = AppConfig::load()?;
    let store = Box::new(FileStore::new(&config.data_dir));
    let mut session = Session::new(&config, store)?;

    let search = session.run_search(query).await?;
    println!(
        "Found {} recipes for {:?} ({} pages):",
        search.results.len(),
        query,
        search.num_pages()
    );
    for hit in search.page(1) {
        println!("  {:>6}  {} ({})", hit.id, hit.title, hit.publisher);
    }

    if let Some(id) = args.get(2) {
        let recipe = session.open_recipe(id).await?;
        println!();
        println!("{} by {}", recipe.title, recipe.publisher);
        println!(
            "Serves {}, about {} minutes  -  {}",
            recipe.servings, recipe.cook_time, recipe.source_url
        );
        for ing in &recipe.ingredients {
            let count = ing
                .count
                .map(format_count)
                .unwrap_or_else(|| "-".to_string());
            println!("  {:>6} {:<4} {}", count, ing.unit, ing.ingredient);
        }
    }

    Ok(())
}
