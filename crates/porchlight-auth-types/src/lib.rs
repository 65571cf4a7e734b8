//! Auth types shared between the Porchlight auth service and the site.
//!
//! Provides the admin session cookie contract: name, lifetime, and builders.

pub mod cookie;
