//! Prompt templates for each generative mode.
//!
//! Article-sized inputs are cut to [`MAX_AI_INPUT_CHARS`] here, so no
//! caller can send an oversized prompt by forgetting to truncate.

use crate::quiz::QUESTIONS_PER_QUIZ;
use crate::text::{truncate_chars, MAX_AI_INPUT_CHARS};

/// Bilingual English <-> Vietnamese dictionary lookup, JSON output.
pub fn translate_prompt(text: &str) -> String {
    format!(
        r#"Act as a smart bilingual dictionary (English <-> Vietnamese).
Input text: "{text}"

Tasks:
1. Detect the language of the input.
2. If English, translate to Vietnamese.
3. If Vietnamese, translate to English.
4. Provide the definition, word type (noun/verb/adj...), and one example sentence.

Output strictly a JSON object with this schema:
{{
  "original": "{text}",
  "translated": "String (the translation)",
  "type": "String (e.g. Noun, Verb)",
  "definition": "String (short definition in the target language)",
  "example": "String (example sentence using the word)"
}}"#
    )
}

/// Learner-level summary of an article, plain text output.
pub fn summarize_prompt(content: &str) -> String {
    let article = truncate_chars(content, MAX_AI_INPUT_CHARS);
    format!(
        r#"Act as an English teacher. Summarize the following article for an A2-B1 English learner.
Requirements:
- Simple vocabulary.
- Under 150 words.
- Output in Vietnamese if the input is too hard, otherwise simple English.
Article: "{article}""#
    )
}

/// Comprehension quiz over an article, JSON array output.
pub fn quiz_prompt(content: &str) -> String {
    let article = truncate_chars(content, MAX_AI_INPUT_CHARS);
    format!(
        r#"Generate {QUESTIONS_PER_QUIZ} multiple-choice questions based on this article to check comprehension.
Output strictly a JSON array.
Schema:
[
  {{
    "question": "String (the question text)",
    "options": ["String", "String", "String", "String"],
    "answer": "String (must match exactly one option content)"
  }}
]
Article: "{article}""#
    )
}

/// Grammar check of one sentence, JSON object output.
pub fn grammar_prompt(text: &str) -> String {
    format!(
        r#"Act as an English grammar checker.
Input text: "{text}"

Task:
1. Check for grammatical errors.
2. If correct, return "isCorrect": true.
3. If incorrect, return "isCorrect": false, provide the corrected version, and explain the error in Vietnamese.

Output strictly JSON:
{{
  "isCorrect": boolean,
  "corrected": "String (corrected sentence, or empty if correct)",
  "explanation": "String (explain the error in Vietnamese, or a compliment if correct)"
}}"#
    )
}

/// Meaning of a word or phrase inside a given sentence, plain text output.
pub fn explain_prompt(text: &str, context: &str) -> String {
    format!(
        r#"Explain the word/phrase "{text}" in the specific context of this sentence: "{context}".
Explain in Vietnamese, nicely and briefly."#
    )
}

/// Short Vietnamese gloss for a dictionary headword, plain text output.
pub fn gloss_prompt(word: &str) -> String {
    format!(
        r#"Dịch từ tiếng Anh "{word}" sang tiếng Việt. Chỉ trả về 1-2 nghĩa thông dụng nhất, ngắn gọn, viết thường, cách nhau bởi dấu phẩy. Không giải thích thêm."#
    )
}
