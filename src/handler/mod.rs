//! # Handler Module
//!
//! The handler capability a route points at, plus the request and response
//! types it acts upon.
//!
//! A route never runs request I/O itself. The server that owns the connection
//! builds a [`HandlerRequest`], hands the route an empty [`HandlerResponse`],
//! and the [`Handler`] fills it in.

mod core;

pub use self::core::{
    Handler, HandlerRef, HandlerRequest, HandlerResponse, HeaderVec, ParamVec, MAX_INLINE_HEADERS,
    MAX_INLINE_PARAMS,
};
