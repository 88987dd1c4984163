use std::env;

use dotenv::dotenv;

use viator::bootstrap::PortFinder;
use viator::server::serve;
use viator::store::{DocumentStore, MemoryStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let preferred = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5000);

    let port = match PortFinder::new().find_free_port(preferred).await {
        Ok(port) => port,
        Err(err) => {
            tracing::error!("failed to find a free port: {}", err);
            return;
        }
    };

    match env::var("DATABASE_URL") {
        Ok(db_uri) => {
            let store = match DocumentStore::new(&db_uri, 5).await {
                Ok(store) => store,
                Err(err) => {
                    tracing::error!("failed to open the destination store: {:?}", err);
                    return;
                }
            };

            serve(store, port).await
        }
        Err(_) => serve(MemoryStore::new(), port).await,
    }
}
