// Prompt template for the generative API.
// The section labels here must stay in sync with `sections::Section::label`.

/// Builds the instruction sent to the generative API.
///
/// Inputs are embedded verbatim. The model is asked for seven labeled sections
/// in a fixed order; `video_length` (minutes) drives how many timestamps it
/// writes. Nothing guarantees the model complies, so the parser is lenient.
pub fn build_prompt(topic: &str, video_length: &str, description: &str) -> String {
    format!(
        r#"I need you to generate complete YouTube content details based on the following input.
Structure your response exactly as shown below with these sections:

VIDEO TITLE: Create a compelling, SEO-optimized YouTube title under 70 characters

DESCRIPTION:
(Write an engaging introduction paragraph of 100-150 words)

TIMESTAMPS:
(Create timestamps based on a {video_length}-minute video. Include 5-10 sections with timecodes like "00:00 - Introduction")

SEARCH TERMS:
(List 5-10 relevant search queries people might use to find this content)

HASHTAGS:
(Provide 15-20 relevant hashtags including the # symbol)

CALL TO ACTION:
(Write a short paragraph with subscribe/like/comment CTAs)

TAGS:
(Provide a comma-separated list of 15-20 SEO-friendly tags WITHOUT hashtags, just the words/phrases)

Here are the details about my video:
Topic/Title Idea: {topic}
Video Length: {video_length} minutes
Content Description: {description}

Only respond with the formatted content as specified above. Do not include any explanations or notes."#
    )
}
