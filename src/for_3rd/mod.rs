//! Implementations of third-party traits.

mod de;
mod ser;
