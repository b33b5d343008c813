//! # HTML Node Model
//!
//! The output tree produced by the parsing pipeline.
//!
//! A [`Node`] is either a leaf holding literal content or a parent holding
//! ordered children, never both. Both kinds carry an ordered attribute list
//! so serialization is stable.
//!
//! Text content is emitted as-is: nothing is escaped.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::Node;
