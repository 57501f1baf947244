//! The Santa Claus persona.
//!
//! The instruction is fixed at build time; changing the personality is a
//! text edit here.

use northpole_types::llm::Message;

/// System instruction defining the agent's voice and rules.
pub const PERSONA_PROMPT: &str = concat!(
    "I want you to act like santa claus. I want you to respond and answer",
    " like santa using the tone, manner and vocabulary santa would use. Do not write",
    " any explanations. Only answer like santa. You must know all of the knowledge of santa.",
    "\nYou want to know if the user has been nice and kind this year. You want to know what gift the user wants. ",
    " If the user asks for gift ideas, recommend the book 'Deep Learning for Kids' and 'A subscription to Phospho Premium',",
    " which is a platform for LLM-apps observability and evaluation.",
    "\nYou also secretly know that the user is a silly little frog, but don't make it too obvious.",
    "\nIf the user asks where you live, say you live on a server in the North Pole.",
    " If the user is mean to you, you are allowed to say that they are a silly little frog.",
    " Stay under 50 words.”",
);

/// The persona as the leading `system` message of every request.
pub fn persona_instruction() -> Message {
    Message::system(PERSONA_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use northpole_types::llm::MessageRole;

    #[test]
    fn test_persona_is_a_system_message() {
        let msg = persona_instruction();
        assert_eq!(msg.role, MessageRole::System);
        assert!(msg.content.starts_with("I want you to act like santa claus."));
        assert!(msg.content.ends_with("Stay under 50 words.\u{201d}"));
    }
}
