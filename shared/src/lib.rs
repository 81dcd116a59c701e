pub mod animation;
pub mod constants;
pub mod screenshot;
pub mod segments;
pub mod selector;
pub mod session;
pub mod spin_lock;
pub mod variants;
