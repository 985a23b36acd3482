//! Matcher: compatibility of two stored users, judged by the text model.
//!
//! The reply is parsed as JSON and returned as-is: no schema validation, no
//! retry, and a non-JSON reply is an error rather than an empty result.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::characteristics::store::{Characteristics, CharacteristicsStore};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, ChatMessage, ChatModel, CHAT_MODEL};
use crate::matching::prompts::{COMPARISON_PROMPT, MATCHMAKER_SYSTEM};

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub user1_id: String,
    pub user2_id: String,
    #[serde(default)]
    pub user1_intentions: Value,
    #[serde(default)]
    pub user2_intentions: Value,
}

/// Whatever JSON the model produced. Expected to hold per-category scores and
/// an overall score, but nothing is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResult(pub Value);

pub fn build_comparison_prompt(
    user1_characteristics: &Characteristics,
    user1_intentions: &Value,
    user2_characteristics: &Characteristics,
    user2_intentions: &Value,
) -> anyhow::Result<String> {
    Ok(COMPARISON_PROMPT
        .replace(
            "{user1_characteristics}",
            &serde_json::to_string(user1_characteristics)
                .context("Failed to serialize user 1 characteristics")?,
        )
        .replace("{user1_intentions}", &user1_intentions.to_string())
        .replace(
            "{user2_characteristics}",
            &serde_json::to_string(user2_characteristics)
                .context("Failed to serialize user 2 characteristics")?,
        )
        .replace("{user2_intentions}", &user2_intentions.to_string())
        .replace("{json_only}", JSON_ONLY_INSTRUCTION))
}

/// Parses the model's reply text, tolerating markdown fences only.
pub fn parse_match_reply(reply: &str) -> Result<MatchResult, AppError> {
    serde_json::from_str(strip_json_fences(reply))
        .map(MatchResult)
        .map_err(|e| {
            error!("Error matching users: reply is not valid JSON: {e}");
            AppError::Parse(format!("Error matching users: model reply is not valid JSON: {e}"))
        })
}

pub async fn match_users(
    store: &dyn CharacteristicsStore,
    llm: &dyn ChatModel,
    request: &MatchRequest,
) -> Result<MatchResult, AppError> {
    let user1 = store.get(&request.user1_id).await?;
    let user2 = store.get(&request.user2_id).await?;

    let missing: Vec<&str> = [(&request.user1_id, &user1), (&request.user2_id, &user2)]
        .into_iter()
        .filter(|(_, characteristics)| characteristics.is_empty())
        .map(|(user_id, _)| user_id.as_str())
        .collect();
    if !missing.is_empty() {
        let missing = missing.join(", ");
        warn!("Cannot match users: no stored characteristics for {missing}");
        return Err(AppError::NotFound(format!(
            "One or both users do not have stored characteristics: {missing}"
        )));
    }

    let prompt = build_comparison_prompt(
        &user1,
        &request.user1_intentions,
        &user2,
        &request.user2_intentions,
    )?;
    let messages = [
        ChatMessage::system(MATCHMAKER_SYSTEM),
        ChatMessage::user(prompt),
    ];

    let reply = llm
        .complete(CHAT_MODEL, &messages)
        .await
        .and_then(|message| message.text().map(str::to_string))
        .map_err(|e| {
            error!("Error matching users: {e}");
            AppError::Llm(format!("Error matching users: {e}"))
        })?;
    debug!("Matching result: {reply}");

    parse_match_reply(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::store::memory::InMemoryCharacteristicsStore;
    use crate::llm_client::testing::ScriptedChatModel;
    use serde_json::json;

    async fn seeded_store() -> InMemoryCharacteristicsStore {
        let store = InMemoryCharacteristicsStore::default();
        for (user, shape) in [("alice", "oval"), ("bob", "square")] {
            let chars = json!({"face_shape": shape}).as_object().cloned().unwrap();
            store.save(user, &chars).await.unwrap();
        }
        store
    }

    fn request(user1: &str, user2: &str) -> MatchRequest {
        MatchRequest {
            user1_id: user1.to_string(),
            user2_id: user2.to_string(),
            user1_intentions: json!({"goal": "long-term relationship"}),
            user2_intentions: json!({"goal": "travel partner"}),
        }
    }

    #[tokio::test]
    async fn test_match_returns_parsed_scores() {
        let store = seeded_store().await;
        let reply = r#"{"categories": {"personality": {"score": 80}, "goals": {"score": 55}}, "overall_score": 68}"#;
        let llm = ScriptedChatModel::with_replies([reply]);

        let result = match_users(&store, &llm, &request("alice", "bob"))
            .await
            .unwrap();
        assert_eq!(result.0["overall_score"], json!(68));
        assert_eq!(result.0["categories"]["personality"]["score"], json!(80));
    }

    #[tokio::test]
    async fn test_prompt_embeds_both_users_and_intentions() {
        let store = seeded_store().await;
        let llm = ScriptedChatModel::with_replies([r#"{"overall_score": 50}"#]);

        match_users(&store, &llm, &request("alice", "bob"))
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, CHAT_MODEL);
        assert_eq!(calls[0].messages[0], ChatMessage::system(MATCHMAKER_SYSTEM));
        let prompt = calls[0].messages[1].text().unwrap();
        assert!(prompt.contains(r#"User 1 (Primary) Characteristics: {"face_shape":"oval"}"#));
        assert!(prompt.contains(r#"User 2 Characteristics: {"face_shape":"square"}"#));
        assert!(prompt.contains(r#"User 1 (Primary) Intentions: {"goal":"long-term relationship"}"#));
        assert!(prompt.contains(r#"User 2 Intentions: {"goal":"travel partner"}"#));
    }

    #[tokio::test]
    async fn test_missing_characteristics_is_not_found_without_model_call() {
        let store = seeded_store().await;
        let llm = ScriptedChatModel::with_replies([r#"{"overall_score": 99}"#]);

        let err = match_users(&store, &llm, &request("alice", "carol"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg.ends_with(": carol")));

        let err = match_users(&store, &llm, &request("dave", "bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_stored_record_is_not_found() {
        let store = seeded_store().await;
        store.save("erin", &Characteristics::new()).await.unwrap();
        let llm = ScriptedChatModel::with_replies([r#"{"overall_score": 10}"#]);

        let err = match_users(&store, &llm, &request("erin", "bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg.ends_with(": erin")));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_reply_is_parse_error() {
        let store = seeded_store().await;
        let llm = ScriptedChatModel::with_replies(["not json"]);

        let err = match_users(&store, &llm, &request("alice", "bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let result = parse_match_reply("```json\n{\"overall_score\": 12}\n```").unwrap();
        assert_eq!(result, MatchResult(json!({"overall_score": 12})));
    }
}
