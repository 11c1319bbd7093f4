pub mod bot;
pub mod policy;

pub use bot::{PlayPlanner, PlayReason};
pub use policy::{Policy, PolicyContext, SimplePolicy};
