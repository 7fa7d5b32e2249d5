mod content;
mod healthcheck;
mod newsletter;

pub use content::*;
pub use healthcheck::*;
pub use newsletter::*;
