// Image analysis prompt.

pub const IMAGE_ANALYSIS_PROMPT: &str = r#"Analyze the provided image and extract detailed attributes of the person in it.
Group the physical features into the following categories:

1. "face_shape": the face shape (e.g. oval, round, square, heart-shaped).
2. "hair_details": hair color, texture (straight, wavy, curly) and length (short, medium, long).
3. "eye_details": eye color and shape (almond, round, hooded).
4. "skin_tone": the skin tone (fair, medium, tan, dark).
5. "other_features": distinctive features such as freckles, moles, scars or makeup.

Return the attributes as a JSON object of exactly this shape:

{
  "face_shape": "<value>",
  "hair_details": {
    "color": "<value>",
    "texture": "<value>",
    "length": "<value>"
  },
  "eye_details": {
    "color": "<value>",
    "shape": "<value>"
  },
  "skin_tone": "<value>",
  "other_features": ["<value>", "<value>"]
}

Users may also describe features they are looking for (face shape, hair color, eye color, ...).
Explain how each identified attribute would be matched against such a description and give a
confidence level for every attribute."#;

/// Detail level requested for uploaded images.
pub const IMAGE_DETAIL: &str = "high";
