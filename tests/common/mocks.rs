//! Mock version of the HTTP transport.
use mockall::mock;

use review_seeder::{
    SeedError,
    item::http::transport::{ReviewTransport, TransportResponse},
    review::payload::ReviewPayload,
};

mock! {
    pub Transport {}
    impl ReviewTransport for Transport {
        fn send(&self, payload: &ReviewPayload) -> Result<TransportResponse, SeedError>;
    }
}
