//! # JSONAPI Model
//!
//! Client-side models for resources that live on a remote service speaking
//! [JSONAPI](https://jsonapi.org). A resource type is registered once; its
//! instances can then be found, listed, created, updated and destroyed
//! without the caller ever touching the wire format.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ModelConfig`] and [`ModelConfigBuilder`]
//! - Validated newtypes for hosts, endpoints and wire type names
//! - Flattening of JSONAPI documents into attribute mappings via
//!   [`deserialization`]
//! - A reqwest-backed [`HttpClient`](clients::HttpClient) behind the
//!   [`Transport`](clients::Transport) seam
//! - Resource registration, lookup and lifecycle via [`rest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_model::{Endpoint, HostUrl, ModelConfig, SerializationType};
//! use jsonapi_model::rest::{Presence, ResourceDefinition};
//!
//! let config = ModelConfig::builder()
//!     .host(HostUrl::new("http://localhost:3000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let notes = ResourceDefinition::builder()
//!     .endpoint(Endpoint::new("notes").unwrap())
//!     .serialize_as(SerializationType::new("notes").unwrap())
//!     .attributes(["title", "body"])
//!     .validator(Presence::of(["title"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "http://localhost:3000");
//! assert_eq!(notes.attributes(), ["title", "body"]);
//! ```
//!
//! ## Working With Records
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jsonapi_model::clients::HttpClient;
//! use jsonapi_model::rest::{Model, ResourceError};
//!
//! let notes = Model::new(notes, Arc::new(HttpClient::new(&config)?));
//!
//! let mut note = notes.new_record();
//! note.set("title", "Groceries")?;
//! note.save().await?;
//!
//! match notes.find(note.id().unwrap()).await {
//!     Ok(found) => assert_eq!(found, note),
//!     Err(ResourceError::NotFound { id }) => println!("{id} vanished"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and transports are passed explicitly
//! - **Fail-fast validation**: registrations and newtypes validate on construction
//! - **One request per operation**: nothing is retried or sent in the background
//! - **Thread-safe**: definitions, models and clients are `Send + Sync`

pub mod clients;
pub mod config;
pub mod deserialization;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{Endpoint, HostUrl, ModelConfig, ModelConfigBuilder, SerializationType};
pub use error::ConfigError;

// Re-export the lifecycle types most callers need
pub use rest::{LifecycleState, Model, Record, ResourceDefinition, ResourceError};
