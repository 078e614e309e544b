#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod encode;
mod error;

pub mod api;
pub mod model;
pub mod paging;
pub mod transport;

pub use api::{DifferentialApi, RevisionApi, UserApi};
pub use client::{Conduit, Method, Params};
pub use error::{ConduitError, RemoteError};
pub use paging::{Cursor, Page, Paginated, request_all};
