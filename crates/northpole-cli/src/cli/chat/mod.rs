//! Interactive chat with the persona agent.
//!
//! The loop shows a typed greeting, then relays each user line through
//! `PersonaAgent::answer_and_log`, streaming the reply as it arrives.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
