use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{API, DestinationAPI};
use crate::entities::{Destination, NewDestination};
use crate::error::Error;

/// Process-local store. Records live for the lifetime of the process and ids
/// restart at 1 on every launch.
pub struct MemoryStore {
    destinations: Mutex<Vec<Destination>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            destinations: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DestinationAPI for MemoryStore {
    #[tracing::instrument(skip(self))]
    async fn list_destinations(&self) -> Result<Vec<Destination>, Error> {
        let destinations = self.destinations.lock().await;

        Ok(destinations.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn create_destination(&self, fields: NewDestination) -> Result<Destination, Error> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let destination = Destination::new(id, fields);

        let mut destinations = self.destinations.lock().await;
        destinations.push(destination.clone());

        tracing::info!(id, "destination added");

        Ok(destination)
    }
}

impl API for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rome() -> NewDestination {
        NewDestination {
            name: "Rome".into(),
            budget: Some(900),
            travel_time: Some(10),
            route: "X via Y".into(),
        }
    }

    #[tokio::test]
    async fn create_then_list_includes_the_record_once() {
        let store = MemoryStore::new();

        let created = store.create_destination(rome()).await.unwrap();

        let listed = store.list_destinations().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].name, "Rome");
        assert_eq!(listed[0].budget, Some(900));
        assert_eq!(listed[0].travel_time, Some(10));
        assert_eq!(listed[0].route, "X via Y");
    }

    #[tokio::test]
    async fn ids_increase_monotonically() {
        let store = MemoryStore::new();

        let first = store.create_destination(rome()).await.unwrap();
        let second = store.create_destination(rome()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let store = MemoryStore::new();

        store.create_destination(rome()).await.unwrap();

        let first: Vec<i64> = store
            .list_destinations()
            .await
            .unwrap()
            .iter()
            .map(|destination| destination.id)
            .collect();
        let second: Vec<i64> = store
            .list_destinations()
            .await
            .unwrap()
            .iter()
            .map(|destination| destination.id)
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn records_keep_insertion_order() {
        let store = MemoryStore::new();

        for name in ["Tokyo", "Paris", "Rome"] {
            let mut fields = rome();
            fields.name = name.into();
            store.create_destination(fields).await.unwrap();
        }

        let names: Vec<String> = store
            .list_destinations()
            .await
            .unwrap()
            .into_iter()
            .map(|destination| destination.name)
            .collect();

        assert_eq!(names, ["Tokyo", "Paris", "Rome"]);
    }
}
