pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::AppConfig;
pub use models::{Role, UserSession};
pub use session::{SessionContext, SessionStore, ROLE_KEY, USER_KEY};
