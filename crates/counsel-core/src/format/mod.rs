mod bullets;

pub use bullets::{format_reply, Reply};
