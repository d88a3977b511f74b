//! LLM prompts for inference and recommendations.
//!
//! All renderers are pure. The focus and career prompts ask for a strict
//! `<Label> N: <name>` / `Reasoning: <text>` line format because
//! `parser` matches on those literal prefixes.

use super::model::{LearnerProfile, NOT_SPECIFIED};

/// Trimmed, non-placeholder value of an optional text field.
fn known(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NOT_SPECIFIED)
}

/// Profile lines worth telling the model about, as `- Label: value`.
fn profile_details(profile: &LearnerProfile) -> Vec<String> {
    let mut details = Vec::new();

    if profile.has_age() {
        details.push(format!("- Age: {}", profile.age));
    }
    if profile.has_passion() {
        details.push(format!("- Passion: {}", profile.passion));
    }

    let optional = [
        ("Interests", &profile.interests),
        ("Personality Traits", &profile.personality_traits),
        ("Educational Background", &profile.educational_background),
        ("Professional Experience", &profile.professional_experience),
        ("Skills", &profile.skills),
        ("Values", &profile.values),
        ("Career Goals", &profile.career_goals),
        ("Location", &profile.location),
    ];
    for (label, value) in optional {
        if let Some(value) = known(value) {
            details.push(format!("- {label}: {value}"));
        }
    }

    details
}

/// Ask the model to pick 3-5 focus areas from the catalog, with reasoning.
pub fn focus_recommendation_prompt(profile: &LearnerProfile, focus_areas: &[&str]) -> String {
    let details = profile_details(profile);
    let profile_section = if details.is_empty() {
        "Learner Profile: No specific information provided yet.".to_string()
    } else {
        format!("Learner Profile:\n{}", details.join("\n"))
    };

    format!(
        "You are an expert career advisor. A learner with the following profile has requested \
         your advice on potential focus areas.\n\n\
         {profile_section}\n\n\
         Available Focus Areas:\n{areas}\n\n\
         Instructions:\n\
         1. Carefully consider the learner's profile and the available focus areas.\n\
         2. Select 3-5 focus areas from the list above that are the BEST FIT for this learner. \
         Use the names exactly as listed.\n\
         3. For EACH selected focus area, provide a concise and UNIQUE explanation (1-2 sentences) \
         of WHY it is a good fit, highlighting specific aspects of the learner's profile that align \
         with the focus area.\n\
         4. Do not repeat the same reasoning for different focus areas.\n\n\
         Output Format:\n\
         Focus Area 1: [Name of Focus Area from the list]\n\
         Reasoning: [Your unique explanation]\n\n\
         Focus Area 2: [Name of Focus Area from the list]\n\
         Reasoning: [Your unique explanation]\n\n\
         ... (and so on)\n\n\
         Recommendations:",
        areas = focus_areas.join(", "),
    )
}

/// Ask for a short personality summary from the intake transcript.
pub fn personality_inference_prompt(conversation_history: &str) -> String {
    format!(
        "Based on the following conversation, infer the user's key personality traits \
         relevant to career choices:\n\n\
         {conversation_history}\n\n\
         Provide a concise summary of their personality in 2-3 sentences."
    )
}

/// Ask for a short summary of the learner's interests.
pub fn interests_prompt(conversation_history: &str) -> String {
    format!(
        "Based on the following conversation history:\n\n\
         {conversation_history}\n\n\
         What are the user's primary interests? Provide a brief summary."
    )
}

/// Ask for 3-5 careers within a chosen focus area, with justification.
pub fn career_recommendation_prompt(
    profile: &LearnerProfile,
    chosen_focus_area: &str,
    location: Option<&str>,
) -> String {
    let or = |field: &Option<String>, default: &'static str| -> String {
        known(field).unwrap_or(default).to_string()
    };
    let age = if profile.has_age() {
        profile.age.to_string()
    } else {
        NOT_SPECIFIED.to_string()
    };
    let passion = if profile.has_passion() {
        profile.passion.clone()
    } else {
        format!("{NOT_SPECIFIED}.")
    };
    let personality = match known(&profile.personality_traits) {
        Some(traits) => format!("Personality Traits (inferred from chat): {traits}"),
        None => "No personality information inferred yet.".to_string(),
    };
    let location_context = match location.map(str::trim).filter(|l| !l.is_empty()) {
        Some(location) => format!("Knowing the user is in {location}, suggest"),
        None => "Suggest".to_string(),
    };

    format!(
        "Based on the following learner profile with a chosen focus area of '{chosen_focus_area}':\n\
         Age: {age}\n\
         Educational Background: {education}\n\
         Professional Experience: {experience}\n\
         Passion: {passion}\n\
         Skills: {skills}\n\
         Interests: {interests}\n\
         Values: {values}\n\
         Career Goals: {goals}\n\
         {personality}\n\n\
         {location_context} 3-5 potential career paths within '{chosen_focus_area}'. \
         Briefly explain why these careers might be a good fit.\n\n\
         Output Format:\n\
         Career 1: [Career name]\n\
         Reasoning: [Why it fits this learner]\n\n\
         Career 2: [Career name]\n\
         Reasoning: [Why it fits this learner]\n\n\
         ... (and so on)",
        education = or(&profile.educational_background, "Not provided."),
        experience = or(&profile.professional_experience, "Not provided."),
        skills = or(&profile.skills, "Not provided."),
        interests = or(&profile.interests, "Not specified."),
        values = or(&profile.values, "Not provided."),
        goals = or(&profile.career_goals, "Not provided."),
    )
}
