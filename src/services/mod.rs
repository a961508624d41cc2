pub mod contact;
pub mod gemini;
