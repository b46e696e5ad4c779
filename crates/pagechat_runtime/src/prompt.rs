//! Prompt assembly for a chat turn.

use pagechat_core::{Message, PageContext};

const SYSTEM_PREAMBLE: &str = "You are a page-reading assistant. The user is currently viewing a \
web page; its readable content is reproduced below.";

const SYSTEM_RULES: &str = "Answer the user's questions using only this page content. If the \
answer is not present in the page, say so explicitly.";

const NO_CONTENT_NOTE: &str = "(no page content is available)";

/// Render the system message embedding the current page snapshot.
pub fn build_system_prompt(context: &PageContext) -> String {
    let body = if context.is_empty() {
        NO_CONTENT_NOTE
    } else {
        context.text()
    };

    format!(
        "{SYSTEM_PREAMBLE}\n\n---PAGE CONTENT START---\n{body}\n---PAGE CONTENT END---\n\n{SYSTEM_RULES}"
    )
}

/// Assemble the prompt sequence for one turn: the system message, the
/// prior history verbatim and in order, then the new user input.
///
/// Pure: deterministic in its inputs, never mutates `history`. History is
/// passed through without truncation or summarization — a known scaling
/// limitation. Combined length is not validated here; an over-length
/// request is the provider's to reject.
pub fn build_prompt(context: &PageContext, history: &[Message], input: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(build_system_prompt(context)));
    messages.extend(history.iter().cloned());
    messages.push(Message::user(input));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagechat_core::Role;

    #[test]
    fn test_system_first_input_last() {
        let context = PageContext::new("Some page text");
        let history = vec![Message::user("earlier"), Message::assistant("reply")];

        let prompt = build_prompt(&context, &history, "what next?");

        assert_eq!(prompt.len(), 4);
        assert_eq!(prompt[0].role, Role::System);
        assert_eq!(prompt.last().unwrap().role, Role::User);
        assert_eq!(prompt.last().unwrap().content, "what next?");
    }

    #[test]
    fn test_history_preserved_verbatim_in_order() {
        let context = PageContext::empty();
        let history = vec![
            Message::user("one"),
            Message::assistant("two"),
            Message::user("three"),
        ];

        let prompt = build_prompt(&context, &history, "four");

        assert_eq!(&prompt[1..4], &history[..]);
    }

    #[test]
    fn test_pure_and_deterministic() {
        let context = PageContext::new("page");
        let history = vec![Message::user("q"), Message::assistant("a")];

        let first = build_prompt(&context, &history, "again");
        let second = build_prompt(&context, &history, "again");

        assert_eq!(first, second);
        // The inputs are untouched.
        assert_eq!(history.len(), 2);
        assert_eq!(context.text(), "page");
    }

    #[test]
    fn test_system_prompt_embeds_context() {
        let context = PageContext::new("The mitochondria is the powerhouse of the cell.");
        let system = build_system_prompt(&context);

        assert!(system.contains("---PAGE CONTENT START---"));
        assert!(system.contains("powerhouse of the cell"));
        assert!(system.contains("say so explicitly"));
    }

    #[test]
    fn test_empty_context_states_no_content() {
        let system = build_system_prompt(&PageContext::empty());
        assert!(system.contains("no page content is available"));
    }
}
