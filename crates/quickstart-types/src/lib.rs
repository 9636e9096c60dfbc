//! Wire types shared by the Quickstart handlers and server.

mod context;
mod event;
mod policy;
mod response;

pub use context::*;
pub use event::*;
pub use policy::*;
pub use response::*;
