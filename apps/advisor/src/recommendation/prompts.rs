// Course advisor prompt template.
// Placeholders are substituted in order by `render_prompt`.

use crate::models::StudentPreferences;

pub const ADVISOR_PROMPT_TEMPLATE: &str = "
You are a course advisor. Based on the student's preferences, recommend the most suitable course from the list below.

{course_data}

Student preferences:
- Interest: {interest}
- Goal: {goal}
- Coding experience: {experience}

Recommend the best course with a short explanation in a professional, clear, and friendly tone.
";

/// Fills the advisor template with the corpus and one student's preferences.
///
/// Substitution is positional, not a blind `replace` chain: placeholder-like
/// text inside the corpus or the interest is left untouched.
pub fn render_prompt(course_data: &str, prefs: &StudentPreferences) -> String {
    let values = [
        ("{course_data}", course_data),
        ("{interest}", prefs.interest.as_str()),
        ("{goal}", prefs.goal.label()),
        ("{experience}", prefs.experience.label()),
    ];

    let mut out = String::with_capacity(ADVISOR_PROMPT_TEMPLATE.len() + course_data.len() + 64);
    let mut rest = ADVISOR_PROMPT_TEMPLATE;
    for (placeholder, value) in values {
        if let Some(idx) = rest.find(placeholder) {
            out.push_str(&rest[..idx]);
            out.push_str(value);
            rest = &rest[idx + placeholder.len()..];
        }
    }
    out.push_str(rest);
    out
}
