//! # Mock Stores
//!
//! [`MockStore<T>`] hands out a real [`StoreClient<T>`] whose requests are answered from a queue
//! of expectations instead of a running [`StoreActor`](crate::framework::StoreActor). Use it to
//! test client-side logic (checkout orchestration, typed client wrappers) deterministically and
//! to inject failures that are awkward to provoke against a real store.
//!
//! | | MockStore | Real store |
//! |---|---|---|
//! | **State** | none, scripted replies | real entities |
//! | **Error injection** | `return_err` | needs a specific state |
//! | **Use case** | logic *around* a client | the entity hooks themselves |
//!
//! ```rust
//! use dine_right::framework::mock::MockStore;
//! use dine_right::framework::StoreError;
//! use dine_right::model::{MenuItem, MenuItemId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<MenuItem>::new();
//!     mock.expect_get(MenuItemId(7)).return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.get(MenuItemId(7)).await, Err(StoreError::StoreClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For assertions on the *payload* a client sends, use the channel helpers instead:
//! [`mock_channel`] returns a client plus the raw receiver, and [`next_create`],
//! [`next_action`] pull the next request off it.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::{Reply, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply, matched against incoming requests in FIFO order.
enum Expectation<T: StoreEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A store double with expectation tracking.
///
/// Requests that arrive with no matching expectation (wrong kind, wrong id, or an empty queue)
/// panic the background task, so the client call under test fails with
/// [`StoreError::StoreDropped`].
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(64);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().ok().and_then(|mut q| q.pop_front());

                match (request, expectation) {
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|q| q.len()).unwrap_or(0);
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: StoreEntity, R: 'static> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: StoreEntity, R: 'static> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        if let Ok(mut queue) = self.expectations.lock() {
            queue.push_back((self.make)(response));
        }
    }
}

/// A client plus the receiving end of its channel, for asserting on raw requests.
pub fn mock_channel<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next request, if it is a `Create`.
pub async fn next_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Action`.
pub async fn next_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Action, Reply<T::ActionResult>)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
