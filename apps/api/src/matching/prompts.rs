// Matcher prompt templates.

pub const MATCHMAKER_SYSTEM: &str = "You are an expert matchmaker who analyzes users' \
    characteristics and intentions and assesses their compatibility.";

pub const COMPARISON_PROMPT: &str = r#"User 1 (Primary) Characteristics: {user1_characteristics}
User 1 (Primary) Intentions: {user1_intentions}

User 2 Characteristics: {user2_characteristics}
User 2 Intentions: {user2_intentions}

Analyze these two users based on their characteristics and intentions.
Compare them in different areas such as personality, lifestyle, goals and physical traits.
Give a compatibility score (0-100) for each category and an overall compatibility score.

OUTPUT SCHEMA:
{
  "categories": {
    "personality": {"score": 0-100, "explanation": "string"},
    "lifestyle": {"score": 0-100, "explanation": "string"},
    "goals": {"score": 0-100, "explanation": "string"},
    "physical_traits": {"score": 0-100, "explanation": "string"}
  },
  "overall_score": 0-100,
  "summary": "string"
}

{json_only}"#;
