//! Prompt construction for the notification drafter.

use crate::types::DraftRequest;

/// Build the single-shot prompt. Current field content is included with a
/// "Not provided" fallback so the model improves rather than invents, and
/// the JSON-only instruction is repeated because smaller models routinely
/// wrap output in code fences anyway (the extractor handles that case).
pub fn notification_prompt(request: &DraftRequest) -> String {
    let subject = request.email_subject.as_deref().unwrap_or("Not provided");
    let body = request.email_body.as_deref().unwrap_or("Not provided");
    let message = request.timeline_message.as_deref().unwrap_or("Not provided");

    format!(
        r#"
You are a professional customer service assistant for an e-commerce platform. Generate customer notification content based on the provided context.

IMPORTANT: Only use information from the provided context. Do not add extra details, assumptions, or hallucinate information that isn't explicitly mentioned.

Context: {context}

Current content (if any):
- Email Subject: {subject}
- Email Body: {body}
- Timeline Message: {message}

Generate improved versions of all three fields. Focus on:
1. Making the content clearer and more professional
2. Using only information from the context
3. Keeping the same meaning but improving clarity
4. Making it more customer-friendly

CRITICAL: Return ONLY a valid JSON object. Do NOT wrap it in markdown code blocks, backticks, or any other formatting. Do NOT include any text before or after the JSON. Start your response directly with {{ and end with }}. No explanations, no code blocks, just pure JSON.

Example of correct response format:
{{"emailSubject":"Your order update","emailBody":"We wanted to inform you about your recent order...","timelineMessage":"Order status updated to processing"}}

Return the JSON object:"#,
        context = request.context,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
