//! Conversational Responder: a fixed two-call exchange with the text model.
//!
//! 1. system prompt + question → initial answer
//! 2. replay the initial answer plus a locally composed assistant turn
//!    (optionally listing document links) → final answer
//!
//! Nothing is kept between requests.

use tracing::{debug, error};

use crate::chat::prompts::{DOCUMENT_LINKS_HEADER, INTERSTITIAL_TEMPLATE, MATCHMAKER_CHAT_SYSTEM};
use crate::documents::catalog::DocumentLink;
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, ChatModel, LlmError, CHAT_MODEL};

/// Words that switch on the document-links branch.
pub const DOCUMENT_KEYWORDS: &[&str] = &["form", "document", "application", "download"];

/// True if the question contains any document keyword, ignoring case.
pub fn mentions_documents(question: &str) -> bool {
    let question = question.to_lowercase();
    DOCUMENT_KEYWORDS.iter().any(|kw| question.contains(kw))
}

/// Builds the assistant turn inserted between the two model calls.
pub fn compose_interstitial(initial_answer: &str, links: Option<&[DocumentLink]>) -> String {
    let mut message = INTERSTITIAL_TEMPLATE.replace("{initial_answer}", initial_answer);
    if let Some(links) = links.filter(|links| !links.is_empty()) {
        message.push_str("\n\n");
        message.push_str(DOCUMENT_LINKS_HEADER);
        for link in links {
            message.push_str(&format!("\n- {}: {}", link.name, link.url));
        }
    }
    message
}

/// Answers a free-text question. `documents` is offered to the model only when
/// the question mentions documents.
pub async fn respond(
    llm: &dyn ChatModel,
    question: &str,
    documents: &[DocumentLink],
) -> Result<String, AppError> {
    let links = mentions_documents(question).then_some(documents);
    debug!(
        "Generating chat response (document links: {})",
        links.is_some()
    );

    run_exchange(llm, question, links).await.map_err(|e| {
        error!("Error generating response: {e}");
        AppError::Llm(format!("Error processing the request: {e}"))
    })
}

async fn run_exchange(
    llm: &dyn ChatModel,
    question: &str,
    links: Option<&[DocumentLink]>,
) -> Result<String, LlmError> {
    let mut messages = vec![
        ChatMessage::system(MATCHMAKER_CHAT_SYSTEM),
        ChatMessage::user(question),
    ];

    let initial = llm.complete(CHAT_MODEL, &messages).await?;
    let interstitial = compose_interstitial(initial.text()?, links);

    messages.push(initial.to_chat_message());
    messages.push(ChatMessage::assistant(interstitial));

    let final_message = llm.complete(CHAT_MODEL, &messages).await?;
    Ok(final_message.text()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedChatModel;
    use crate::llm_client::Role;

    fn catalog() -> Vec<DocumentLink> {
        vec![DocumentLink {
            key: "registration".to_string(),
            name: "Client Registration Form".to_string(),
            url: "https://example.com/forms/client-registration-form.pdf".to_string(),
        }]
    }

    #[test]
    fn test_keywords_trigger_document_branch() {
        assert!(mentions_documents("Where can I download the form?"));
        assert!(mentions_documents("Which DOCUMENTS do I need?"));
        assert!(mentions_documents("How is my application going"));
    }

    #[test]
    fn test_keywords_match_inside_longer_words() {
        assert!(mentions_documents("I'm downloading the app now"));
        assert!(mentions_documents("Is there a downloadable PDF?"));
        assert!(mentions_documents("I need more information about dating"));
    }

    #[test]
    fn test_questions_without_keywords_do_not_trigger() {
        assert!(!mentions_documents("What do you think of my profile?"));
        assert!(!mentions_documents(""));
    }

    #[test]
    fn test_interstitial_without_links() {
        let text = compose_interstitial("You like hiking.", None);
        assert_eq!(
            text,
            "Thank you for sharing! You like hiking. Let's dive deeper into what you're \
             looking for and how I can assist further."
        );
    }

    #[test]
    fn test_interstitial_lists_links() {
        let docs = catalog();
        let text = compose_interstitial("Sure.", Some(&docs));
        assert!(text.contains(DOCUMENT_LINKS_HEADER));
        assert!(text.ends_with(
            "- Client Registration Form: https://example.com/forms/client-registration-form.pdf"
        ));
    }

    #[tokio::test]
    async fn test_respond_makes_two_calls_and_returns_final_answer() {
        let llm = ScriptedChatModel::with_replies(["First thoughts.", "Refined answer."]);

        let answer = respond(&llm, "What do you think of my profile?", &catalog())
            .await
            .unwrap();
        assert_eq!(answer, "Refined answer.");

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].messages.len(), 2);

        let follow_up = &calls[1].messages;
        assert_eq!(follow_up.len(), 4);
        assert_eq!(follow_up[2], ChatMessage::assistant("First thoughts."));
        assert_eq!(follow_up[3].role, Role::Assistant);
        let interstitial = follow_up[3].text().unwrap();
        assert!(interstitial.starts_with("Thank you for sharing! First thoughts."));
        assert!(!interstitial.contains(DOCUMENT_LINKS_HEADER));
    }

    #[tokio::test]
    async fn test_respond_includes_links_when_documents_mentioned() {
        let llm = ScriptedChatModel::with_replies(["Here you go.", "Anything else?"]);

        respond(&llm, "Where can I download the form?", &catalog())
            .await
            .unwrap();

        let calls = llm.calls();
        let interstitial = calls[1].messages[3].text().unwrap();
        assert!(interstitial.contains("client-registration-form.pdf"));
    }

    #[tokio::test]
    async fn test_respond_fails_when_first_call_fails() {
        let llm = ScriptedChatModel::default();
        llm.push_error(LlmError::Api {
            status: 500,
            message: "upstream down".to_string(),
        });

        let err = respond(&llm, "hi", &catalog()).await.unwrap_err();
        assert!(
            matches!(err, AppError::Llm(ref msg) if msg.starts_with("Error processing the request"))
        );
        assert_eq!(llm.calls().len(), 1);
    }
}
