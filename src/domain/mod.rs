pub mod resource;
pub mod session;
pub mod status;

pub use resource::ResourceFamily;
pub use session::Session;
pub use status::{FavoriteStatus, ToggleOutcome, ToggleState};
