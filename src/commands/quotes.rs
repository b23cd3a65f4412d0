use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::store::QuoteStore;
use crate::types::{CategoryFilter, Quote};

fn print_quote(quote: &Quote) {
    println!("\"{}\" [{}] ({})", quote.text, quote.category, quote.id);
}

pub async fn add(app: &App, text: &str, category: &str, offline: bool) -> Result<()> {
    let quote = app.store.lock().await.add_quote(text, category)?;
    print_quote(&quote);
    if offline {
        return Ok(());
    }

    let scheduler = app.scheduler()?;
    match scheduler.push_then_sync(quote).await {
        Ok(outcome) => log::info!("sync after add: {:?}", outcome),
        Err(e) => log::warn!("quote saved locally, sync failed: {}", e),
    }
    Ok(())
}

/// An explicit `--category` wins; otherwise the remembered preference applies.
fn resolve_filter(store: &QuoteStore, category: Option<&str>) -> Result<CategoryFilter> {
    if category.is_some() {
        return Ok(CategoryFilter::from_optional(category));
    }
    let remembered = store.last_selected_category()?;
    Ok(CategoryFilter::from_optional(remembered.as_deref()))
}

pub async fn list(app: &App, category: Option<&str>) -> Result<()> {
    let store = app.store.lock().await;
    let filter = resolve_filter(&store, category)?;
    for quote in store.filtered_view(&filter) {
        print_quote(&quote);
    }
    Ok(())
}

pub async fn random(app: &App, category: Option<&str>) -> Result<()> {
    let store = app.store.lock().await;
    let filter = resolve_filter(&store, category)?;
    match store.random_quote(&filter) {
        Some(quote) => print_quote(&quote),
        None => println!("No quotes available."),
    }
    Ok(())
}

pub async fn categories(app: &App) -> Result<()> {
    for category in app.store.lock().await.categories() {
        println!("{category}");
    }
    Ok(())
}

pub async fn export(app: &App, out: Option<&Path>) -> Result<()> {
    let payload = app
        .store
        .lock()
        .await
        .export_quotes()
        .context("serializing quotes")?;
    match out {
        Some(path) => {
            std::fs::write(path, payload.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("📤 Exported quotes to {}", path.display());
        }
        None => println!("{payload}"),
    }
    Ok(())
}

pub async fn import(app: &App, file: &Path) -> Result<()> {
    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let count = app.store.lock().await.import_json(&payload)?;
    log::info!("✅ Imported {} quotes from {}", count, file.display());
    Ok(())
}
