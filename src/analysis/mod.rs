pub mod extract;
pub mod keys;
pub mod ranking;
pub mod slug;
