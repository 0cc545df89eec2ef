//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of scripted expectations instead of a running store. It lets you test code
//! that *uses* a store (services, domain clients) quickly and deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Scripting a Store
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{FrameworkError, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ticket { id: Option<u64>, title: String }
//!
//! impl StoredEntity for Ticket {
//!     type Id = u64;
//!     fn id(&self) -> Option<&u64> { self.id.as_ref() }
//!     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ticket>::new();
//!     let stored = Ticket { id: Some(1), title: "broken build".into() };
//!     mock.expect_get(1).return_ok(Some(stored.clone()));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Some(stored));
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw Channel Helpers
//!
//! Use [`create_mock_client`] to get a client and the receiver it talks to, then pull requests
//! off with [`expect_save`], [`expect_get`] or [`expect_list`] and answer them by hand. This is
//! the tool of choice when the test must inspect the *payload* a caller sent.

use crate::client::ResourceClient;
use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: StoredEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Save {
        response: SaveResponse<T>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

enum SaveResponse<T> {
    /// Answer with the saved entity, giving it this identity when it has none.
    Echo(Option<u64>),
    Fixed(Result<T, FrameworkError>),
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation aborts the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: StoredEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Save { mut entity, respond_to }, Some(Expectation::Save { response })) => {
                        let response = match response {
                            SaveResponse::Echo(id) => {
                                let unsaved = entity.id().is_none();
                                if let Some(id) = id.filter(|_| unsaved) {
                                    entity.assign_id(T::Id::from(id));
                                }
                                Ok(entity)
                            }
                            SaveResponse::Fixed(response) => response,
                        };
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn push<T: StoredEntity>(expectations: &Mutex<VecDeque<Expectation<T>>>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("expectation queue poisoned")
        .push_back(expectation);
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoredEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoredEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: StoredEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoredEntity> SaveExpectationBuilder<T> {
    /// Answers with the entity exactly as it was sent.
    pub fn return_saved(self) {
        push(&self.expectations, Expectation::Save { response: SaveResponse::Echo(None) });
    }

    /// Answers with the entity as it was sent, assigning `id` if it had no identity yet.
    pub fn return_saved_with_id(self, id: u64) {
        push(&self.expectations, Expectation::Save { response: SaveResponse::Echo(Some(id)) });
    }

    /// Sets the expectation to return a fixed successful result.
    pub fn return_ok(self, entity: T) {
        push(&self.expectations, Expectation::Save { response: SaveResponse::Fixed(Ok(entity)) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Save { response: SaveResponse::Fixed(Err(error)) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoredEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoredEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(items) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::List { response: Err(error) });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the part of the actor: it pulls requests off `receiver`, asserts on
/// them, and answers through the enclosed responder.
pub fn create_mock_client<T: StoredEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Invoice {
        id: Option<u64>,
        amount_cents: i64,
    }

    impl StoredEntity for Invoice {
        type Id = u64;

        fn id(&self) -> Option<&u64> {
            self.id.as_ref()
        }

        fn assign_id(&mut self, id: u64) {
            self.id = Some(id);
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Invoice>(10);

        let save_task = tokio::spawn(async move {
            client
                .save(Invoice { id: None, amount_cents: 1250 })
                .await
        });

        let (entity, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(entity.amount_cents, 1250);
        responder
            .send(Ok(Invoice { id: Some(9), ..entity }))
            .unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(9));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Invoice>::new();

        mock.expect_save().return_saved_with_id(3);
        mock.expect_get(3)
            .return_ok(Some(Invoice { id: Some(3), amount_cents: 99 }));
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();

        let saved = client
            .save(Invoice { id: None, amount_cents: 99 })
            .await
            .unwrap();
        assert_eq!(saved.id, Some(3));

        let fetched = client.get(3).await.unwrap();
        assert_eq!(fetched, Some(saved));
        assert!(client.list().await.unwrap().is_empty());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::<Invoice>::new();
        mock.expect_save().return_err(FrameworkError::ActorClosed);

        let result = mock.client().save(Invoice { id: None, amount_cents: 1 }).await;

        assert_eq!(result, Err(FrameworkError::ActorClosed));
        mock.verify();
    }

    #[tokio::test]
    async fn test_save_responses() {
        let mut mock = MockClient::<Invoice>::new();
        let stored = Invoice { id: Some(12), amount_cents: 500 };
        mock.expect_save().return_saved();
        mock.expect_save().return_ok(stored.clone());

        let client = mock.client();

        // Echoed back unchanged
        let echoed = client.save(Invoice { id: Some(4), amount_cents: 7 }).await;
        assert_eq!(echoed, Ok(Invoice { id: Some(4), amount_cents: 7 }));

        // Fixed answer, whatever was sent
        let fixed = client.save(Invoice { id: None, amount_cents: 1 }).await;
        assert_eq!(fixed, Ok(stored));

        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_read_helpers() {
        let (client, mut receiver) = create_mock_client::<Invoice>(10);

        let read_task = tokio::spawn(async move {
            let one = client.get(8).await;
            let all = client.list().await;
            (one, all)
        });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, 8);
        responder.send(Ok(None)).unwrap();

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        let invoice = Invoice { id: Some(1), amount_cents: 20 };
        responder.send(Ok(vec![invoice.clone()])).unwrap();

        let (one, all) = read_task.await.unwrap();
        assert_eq!(one, Ok(None));
        assert_eq!(all, Ok(vec![invoice]));
    }
}
