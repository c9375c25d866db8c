pub mod indexer;
pub mod wc;

use crate::mr::MapFn;

pub fn get_app(app: &str) -> Result<Box<dyn MapFn + Send + Sync>, anyhow::Error> {
    match app {
        "wc" => Ok(Box::new(wc::map)),
        "indexer" => Ok(Box::new(indexer::map)),
        _ => Err(anyhow::anyhow!("Unknown app: {}", app)),
    }
}
