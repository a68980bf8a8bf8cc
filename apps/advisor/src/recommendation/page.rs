//! Server-rendered advisor page: the form, an optional error banner and an
//! optional recommendation card.

use std::fmt::Write;

use crate::errors::AppError;
use crate::models::{Experience, Goal, StudentPreferences};
use crate::recommendation::requester::Recommendation;

const STYLE: &str = r#"
body {
    background-color: #F4F7FA;
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
    color: #102B3F;
    max-width: 720px;
    margin: 0 auto;
    padding: 32px 16px;
}
h1, h2, h3 { color: #102B3F; font-weight: 600; }
label { display: block; margin-top: 16px; font-weight: 600; }
input[type="text"], select {
    background-color: #FFFFFF;
    color: #102B3F;
    border: 2px solid #F8D64E;
    border-radius: 8px;
    padding: 10px;
    font-size: 16px;
    width: 100%;
    box-sizing: border-box;
}
button {
    margin-top: 20px;
    background-color: #F8D64E;
    color: #102B3F;
    font-weight: 600;
    border: none;
    border-radius: 8px;
    padding: 10px 20px;
    cursor: pointer;
}
button:hover { background-color: #e6c640; }
.error {
    margin-top: 20px;
    padding: 12px 16px;
    border-radius: 8px;
    background-color: #FDECEA;
    color: #8A1C1C;
}
.recommendation-card {
    background-color: #FFFFFF;
    border: 2px solid #F8D64E;
    border-radius: 10px;
    padding: 20px;
    margin-top: 20px;
    box-shadow: 0px 4px 8px rgba(0,0,0,0.05);
}
"#;

/// What to show under the form after a submission.
pub enum Outcome<'a> {
    Recommended(&'a Recommendation),
    Failed(&'a AppError),
}

/// Message shown for a failed submission. Validation messages are shown as-is;
/// everything else is prefixed the way the advisor always reported failures.
pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) => msg.clone(),
        other => format!("Error: {other}"),
    }
}

pub fn render_page(prefs: &StudentPreferences, outcome: Option<Outcome<'_>>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Course Advisor - OdumareTech</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>&#127891; OdumareTech Course Advisor</h1>\n");
    html.push_str(
        "<p>Get the <strong>best course recommendation</strong> based on your interests, goals, \
         and experience level. Our AI advisor helps you pick courses tailored just for you.</p>\n",
    );

    render_form(&mut html, prefs);

    match outcome {
        Some(Outcome::Failed(err)) => {
            let _ = writeln!(
                html,
                "<div class=\"error\" role=\"alert\">{}</div>",
                escape_html(&error_message(err))
            );
        }
        Some(Outcome::Recommended(rec)) => {
            let _ = writeln!(
                html,
                "<div class=\"recommendation-card\">\n<h3>&#128218; Recommended Course</h3>\n<p>{}</p>\n</div>",
                escape_html(&rec.text).replace('\n', "<br>\n")
            );
        }
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, prefs: &StudentPreferences) {
    html.push_str("<form method=\"post\" action=\"/recommend\">\n");

    let _ = writeln!(
        html,
        "<label for=\"interest\">What is your area of interest?</label>\n\
         <input type=\"text\" id=\"interest\" name=\"interest\" value=\"{}\">",
        escape_html(&prefs.interest)
    );

    html.push_str("<label for=\"goal\">What is your main goal for taking a course?</label>\n");
    html.push_str("<select id=\"goal\" name=\"goal\">\n");
    for goal in Goal::ALL {
        push_option(html, goal.label(), goal == prefs.goal);
    }
    html.push_str("</select>\n");

    html.push_str("<label for=\"experience\">What is your coding experience level?</label>\n");
    html.push_str("<select id=\"experience\" name=\"experience\">\n");
    for exp in Experience::ALL {
        push_option(html, exp.label(), exp == prefs.experience);
    }
    html.push_str("</select>\n");

    html.push_str("<button type=\"submit\">Get Recommendation</button>\n</form>\n");
}

fn push_option(html: &mut String, label: &str, selected: bool) {
    let label = escape_html(label);
    let selected = if selected { " selected" } else { "" };
    let _ = writeln!(html, "<option value=\"{label}\"{selected}>{label}</option>");
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_blank_page_has_form_and_no_outcome() {
        let html = render_page(&StudentPreferences::default(), None);
        assert!(html.contains("<form method=\"post\" action=\"/recommend\">"));
        assert!(html.contains("Get Recommendation"));
        assert!(!html.contains("recommendation-card\">"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_page_carries_brand_in_title_and_heading() {
        let html = render_page(&StudentPreferences::default(), None);
        assert!(html.contains("<title>Course Advisor - OdumareTech</title>"));
        assert!(html.contains("<h1>&#127891; OdumareTech Course Advisor</h1>"));
    }

    #[test]
    fn test_form_lists_all_options() {
        let html = render_page(&StudentPreferences::default(), None);
        for label in [
            "Learn a skill for a job",
            "Learn for school",
            "Not sure yet",
            "Beginner",
            "Intermediate",
            "Advanced",
        ] {
            assert!(html.contains(&format!(">{label}</option>")), "missing option {label}");
        }
    }

    #[test]
    fn test_previous_choices_are_reselected() {
        let prefs = StudentPreferences {
            interest: "robotics".to_string(),
            goal: Goal::School,
            experience: Experience::Advanced,
        };
        let html = render_page(&prefs, None);
        assert!(html.contains("value=\"robotics\""));
        assert!(html.contains("<option value=\"Learn for school\" selected>"));
        assert!(html.contains("<option value=\"Advanced\" selected>"));
        assert!(html.contains("<option value=\"Beginner\">"));
    }

    #[test]
    fn test_recommendation_card_shows_text() {
        let rec = Recommendation {
            text: "Try Course X".to_string(),
            model: "stub".to_string(),
        };
        let html = render_page(&StudentPreferences::default(), Some(Outcome::Recommended(&rec)));
        assert!(html.contains("Recommended Course"));
        assert!(html.contains("<p>Try Course X</p>"));
    }

    #[test]
    fn test_recommendation_text_is_escaped_and_keeps_line_breaks() {
        let rec = Recommendation {
            text: "Course <b>X</b>\nGreat fit".to_string(),
            model: "stub".to_string(),
        };
        let html = render_page(&StudentPreferences::default(), Some(Outcome::Recommended(&rec)));
        assert!(html.contains("Course &lt;b&gt;X&lt;/b&gt;<br>\nGreat fit"));
        assert!(!html.contains("<b>X</b>"));
    }

    #[test]
    fn test_validation_error_shown_without_prefix() {
        let err = AppError::Validation("Please fill in your area of interest.".to_string());
        let html = render_page(&StudentPreferences::default(), Some(Outcome::Failed(&err)));
        assert!(html.contains("role=\"alert\">Please fill in your area of interest.</div>"));
    }

    #[test]
    fn test_request_error_prefixed() {
        let err = AppError::Request("API error (status 401): bad key".to_string());
        assert_eq!(error_message(&err), "Error: API error (status 401): bad key");
    }

    #[test]
    fn test_interest_value_is_escaped() {
        let prefs = StudentPreferences {
            interest: "\"><script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let html = render_page(&prefs, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
