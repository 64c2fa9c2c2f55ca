//! Instruction text sent to the generation service.

use montage_core::montage_schema;

/// Compose the generation prompt for a creative direction.
///
/// The prompt demands JSON only, carries the descriptor schema, quotes the
/// caller's text verbatim, and repeats the ban on code fences and commentary.
///
/// # Examples
///
/// ```
/// use montage_pipeline::build_prompt;
///
/// let prompt = build_prompt("Rainy Tokyo, lo-fi mood");
/// assert!(prompt.contains("Rainy Tokyo, lo-fi mood"));
/// assert!(prompt.contains("\"minItems\": 2"));
/// ```
pub fn build_prompt(text: &str) -> String {
    let schema = montage_schema();

    format!(
        "You are a creative director planning a short visual montage.\n\
         Respond with ONLY valid JSON that conforms to this JSON Schema:\n\
         \n\
         {schema:#}\n\
         \n\
         Creative direction from the user:\n\
         \"\"\"\n\
         {text}\n\
         \"\"\"\n\
         \n\
         Return the JSON object only. Do not wrap it in markdown code fences \
         and do not add any commentary before or after it."
    )
}
