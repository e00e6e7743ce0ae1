//! Request middleware.
//!
//! - [`origin::origin_gate`] -- Rejects browser requests whose `Origin` is
//!   not on the configured allow-list.

pub mod origin;
