//! The assistant widget's canned-response engine. Keyword matching over
//! the lowercased input; the first matching branch wins.

pub mod handlers;

pub const GREETING: &str =
    "Hi there! 👋 I'm your SkillBridge assistant. How can I help you today?";

const DEFAULT_REPLY: &str = "I'm here to help you find the best universities based on your \
     academic profile. You can ask me about the marksheet upload process, selecting interests, \
     or university recommendations.";

pub fn reply(input: &str) -> &'static str {
    let input = input.to_lowercase();

    if input.contains("hello") || input.contains("hi") {
        "Hello! How can I help you with finding universities?"
    } else if input.contains("university") || input.contains("college") {
        "To find matching universities, please upload your marksheet and select your interests \
         on the main page."
    } else if input.contains("marksheet") || input.contains("upload") {
        "You can upload your marksheet on the main page. We'll analyze it and suggest \
         universities based on your stream and marks."
    } else if input.contains("interest") || input.contains("preference") {
        "After uploading your marksheet, you'll be able to select your interests. This helps us \
         find universities that match your preferences."
    } else if input.contains("thank") {
        "You're welcome! Is there anything else I can help you with?"
    } else if input.contains("contact") || input.contains("support") {
        "For additional support, you can email us at support@skillbridge.com or call our \
         helpline at +1-800-SKILL-BRIDGE."
    } else {
        DEFAULT_REPLY
    }
}
