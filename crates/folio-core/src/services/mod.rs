//! Application services built on the ports.

mod blog;
mod gate;

pub use blog::BlogService;
pub use gate::CredentialGate;
