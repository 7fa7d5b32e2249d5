//! Client side of the newsletter signup: field state, validation, debounce
//! and the submission state machine, talking to the relay over HTTP.

mod controller;
mod debounce;
mod relay_client;
mod status;

pub use controller::*;
pub use debounce::*;
pub use relay_client::*;
pub use status::*;
