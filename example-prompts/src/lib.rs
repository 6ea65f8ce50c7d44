pub mod order;
pub mod profile;

// Re-export profile types
pub use profile::Profile;

// Re-export order types
pub use order::{Address, Order};
