mod history;

pub use history::Conversation;
