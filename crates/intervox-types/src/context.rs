//! Participant and conversation context for a session request.

use serde::{Deserialize, Serialize};

/// Immutable record describing the participant and the conversation they are
/// about to have.
///
/// Constructed once per session request and sent to the credential issuer as
/// the `metadata` payload. Never mutated after the request is made; a new
/// session attempt builds a new context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Participant display name.
    pub name: String,
    /// Participant age, kept as free text (it comes from a form field).
    pub age: String,
    /// Participant gender.
    pub gender: String,
    /// Industry the participant works in.
    pub industry: String,
    /// Years of experience, free text.
    pub experience: String,
    /// Stated career goal.
    pub goal: String,
    /// Background and demographics notes.
    pub background: String,
    /// Goals and motivations notes.
    pub motivations: String,
    /// Pain points and challenges notes.
    pub pain_points: String,
    /// Interests and behaviors notes.
    pub interests: String,
    /// Free-text prompt steering the interviewing agent.
    pub prompt: String,
}

impl SessionContext {
    /// Renders the context as the free-text candidate sheet the interviewing
    /// agent receives alongside the structured fields.
    pub fn candidate_detail(&self) -> String {
        format!(
            "Name: {}\n\
             Age: {}\n\
             Gender: {}\n\
             \n\
             Industry: {}\n\
             Years of Experience: {}\n\
             Career Goal: {}\n\
             Background & Demographics: {}\n\
             \n\
             Goals & Motivations: {}\n\
             \n\
             Pain Points & Challenges: {}\n\
             \n\
             Interests & Behaviors: {}\n",
            self.name,
            self.age,
            self.gender,
            self.industry,
            self.experience,
            self.goal,
            self.background,
            self.motivations,
            self.pain_points,
            self.interests,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_detail_includes_every_field() {
        let context = SessionContext {
            name: "Ada".to_string(),
            age: "36".to_string(),
            gender: "female".to_string(),
            industry: "Research".to_string(),
            experience: "12".to_string(),
            goal: "lead a lab".to_string(),
            background: "mathematics".to_string(),
            motivations: "rigor".to_string(),
            pain_points: "funding".to_string(),
            interests: "computation".to_string(),
            prompt: "be curious".to_string(),
        };

        let detail = context.candidate_detail();
        assert!(detail.contains("Name: Ada"));
        assert!(detail.contains("Years of Experience: 12"));
        assert!(detail.contains("Pain Points & Challenges: funding"));
        // The prompt steers the agent separately; it is not part of the sheet.
        assert!(!detail.contains("be curious"));
    }

    #[test]
    fn serializes_with_snake_case_field_names() {
        let context = SessionContext {
            name: "Ada".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&context).expect("context should serialize");
        assert_eq!(value["name"], "Ada");
        assert!(value.get("pain_points").is_some());
    }
}
