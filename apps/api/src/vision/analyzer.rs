//! Image Analyzer: one vision-model round trip per image.

use serde_json::Value;
use tracing::{debug, error};

use crate::characteristics::store::Characteristics;
use crate::errors::AppError;
use crate::llm_client::{
    AssistantMessage, ChatMessage, ChatModel, ContentPart, ImageUrl, VISION_MODEL,
};
use crate::vision::prompts::{IMAGE_ANALYSIS_PROMPT, IMAGE_DETAIL};

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Sends a base64-encoded image with the fixed analysis instruction to the vision
/// model and returns the model's message untouched.
pub async fn analyze_image(
    llm: &dyn ChatModel,
    base64_image: &str,
    mime_type: &str,
) -> Result<AssistantMessage, AppError> {
    debug!("Sending request to vision model {VISION_MODEL}");

    let messages = [ChatMessage::user_parts(vec![
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:{mime_type};base64,{base64_image}"),
                detail: IMAGE_DETAIL.to_string(),
            },
        },
        ContentPart::Text {
            text: IMAGE_ANALYSIS_PROMPT.to_string(),
        },
    ])];

    llm.complete(VISION_MODEL, &messages).await.map_err(|e| {
        error!("Error processing image: {e}");
        AppError::Llm(format!("Error processing image: {e}"))
    })
}

/// Pulls the characteristics object out of an analyzer reply.
///
/// The reply usually mixes the requested JSON object with prose or a second
/// block about matching logic, so only the first JSON value starting at the
/// first `{` is parsed; anything after it is ignored.
pub fn extract_characteristics(message: &AssistantMessage) -> Result<Characteristics, AppError> {
    let text = message
        .text()
        .map_err(|e| AppError::Parse(format!("Image analysis reply unusable: {e}")))?;

    let start = text.find('{').ok_or_else(|| {
        AppError::Parse("Image analysis reply contains no JSON object".to_string())
    })?;

    let first = serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<Value>()
        .next();

    match first {
        Some(Ok(Value::Object(map))) => Ok(map),
        Some(Ok(_)) | None => Err(AppError::Parse(
            "Image analysis reply is not a JSON object".to_string(),
        )),
        Some(Err(e)) => {
            error!("Error parsing image analysis reply: {e}");
            Err(AppError::Parse(format!(
                "Image analysis reply is not valid JSON: {e}"
            )))
        }
    }
}
