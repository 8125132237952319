//! Resolution pipeline - request text to assembled response

pub mod resolver;
pub mod response;

pub use resolver::{fallback_size, Intents, Resolution, Resolver};
pub use response::{assemble, ChatResponse};
