//! # wiregraph-core
//!
//! The object-graph model: graph node identity, type naming, filtering, and
//! relation discovery.
//!
//! # Module Structure
//!
//! - [`object`]: the [`GraphObject`] trait, [`ObjectRef`] handles, and
//!   [`ObjectId`] identity tokens
//! - [`type_key`]: type-path cleaning into display names
//! - [`filter`]: [`ObjectFilter`] predicates and the allow/deny builder
//! - [`discover`]: the [`RelationDiscovery`] collaborator contract and its
//!   built-in implementations

pub mod discover;
pub mod filter;
pub mod object;
pub mod type_key;

pub use discover::{DependencyWalker, RelationDiscovery, StaticRelation};
pub use filter::{FilterBuilder, ObjectFilter};
pub use object::{GraphObject, ObjectId, ObjectRef};
pub use type_key::simple_type_name;
