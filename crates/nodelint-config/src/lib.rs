//! Nodelint Config
//!
//! This crate contains the workflow document types for nodelint and the
//! loader that reads them from disk.
//!
//! A workflow document is a JSON object with three required keys:
//!
//! ```json
//! {
//!   "name": "My workflow",
//!   "nodes": [
//!     { "id": "1", "name": "Cron", "type": "n8n-nodes-base.cron", "typeVersion": 1, "position": [0, 0] }
//!   ],
//!   "connections": {
//!     "Cron": { "main": [[{ "node": "HTTP Request", "type": "main", "index": 0 }]] }
//!   }
//! }
//! ```
//!
//! Loading only produces a generic `serde_json::Value` tree. Shape checks and
//! the projection into [`Document`] are done by `nodelint-workflow`, so a
//! single malformed node never hides problems in the top-level shape.

mod connection;
mod document;
mod load;
mod node;

pub use connection::{Connection, ConnectionSet};
pub use document::Document;
pub use load::{LoadError, load, parse};
pub use node::{NodeDef, Position};
