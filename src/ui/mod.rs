pub mod outline;
pub mod prompts;
