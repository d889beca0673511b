//! Promise-returning facade over a callback-driven Kinesis client.
//!
//! # Architecture
//!
//! - [`sdk`] - The boundary: [`KinesisAsyncClient`] issues a request and later
//!   invokes an [`AsyncHandler`] from its own execution context
//! - [`promise`] - Single-assignment [`Promise`] / [`Completer`] pair
//! - [`KinesisClient`] - One promise-returning method per client operation,
//!   plus shorthand forms that build the request from bare arguments
//!
//! ```text
//! caller ── KinesisClient::put_record(req) ──> KinesisAsyncClient::put_record_async(req, handler)
//!   ^                                                         |
//!   |                                        (later, any thread)
//!   └──── Promise<PutRecordResult, C::Error> <── handler.on_success / on_error
//! ```
//!
//! # Error Handling
//!
//! A rejected promise carries the client's error value as-is. There is no
//! error type of this crate's own at call time: no retries, no
//! classification, no timeout. A promise whose handler is dropped without
//! being invoked never settles.
//!
//! # Misbehaving clients
//!
//! A client that invokes a handler more than once cannot change a settled
//! promise. How the extra call is reported is chosen with
//! [`DoubleSettlement`], either directly or through
//! [`KinesisPromiseConfig`].

mod client;
pub mod promise;
pub mod sdk;

pub use client::{KinesisClient, KinesisPromise};
pub use promise::{Completer, Promise, PromiseHandler, promise};
pub use sdk::{AsyncHandler, Handler, KinesisAsyncClient};

pub use kinesis_promise_config as config;
pub use kinesis_promise_config::{ConfigError, KinesisPromiseConfig};
pub use kinesis_promise_types as types;
pub use kinesis_promise_types::DoubleSettlement;
