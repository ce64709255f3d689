//! Boolean text filtering.
//!
//! A query such as `(kuppens and vaan) or aarts` is parsed once with
//! [`search_query::parse`] and then evaluated against any number of text
//! blocks. Evaluation reports whether a block matched and which terms made
//! it match; [`highlight`] marks those terms in the text and [`filter`]
//! applies a query to whole documents.

pub mod cli;
pub mod config;
pub mod filter;
pub mod highlight;
pub mod search_query;

#[cfg(test)]
mod tests;
