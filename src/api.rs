use async_trait::async_trait;

use crate::entities::{Destination, NewDestination};
use crate::error::Error;

#[async_trait]
pub trait DestinationAPI {
    async fn list_destinations(&self) -> Result<Vec<Destination>, Error>;
    async fn create_destination(&self, fields: NewDestination) -> Result<Destination, Error>;
}

pub trait API: DestinationAPI {}
