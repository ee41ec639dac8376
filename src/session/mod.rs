pub mod coordinator;
pub mod guard;
pub mod navigator;
pub mod state;
pub mod token;

pub use coordinator::SessionCoordinator;
pub use guard::{GuardDecision, RouteGuard};
pub use navigator::{LogNavigator, Navigator, RecordingNavigator};
pub use state::{SessionPhase, SessionRoutes, SessionState};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
