/// Builds the outgoing reply for a user message.
///
/// Stand-in for the real OSKY inference call. The message is substituted
/// verbatim; JSON escaping happens when the response is serialized.
pub fn generate_reply(message: &str) -> String {
    format!("OSKY AI: You said '{message}'")
}
