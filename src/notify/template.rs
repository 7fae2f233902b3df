use chrono::{Datelike, Utc};

/// Parameters for the fixed HTML email template.
#[derive(Debug, Clone)]
pub struct TemplateData {
    pub title: String,
    pub greeting: String,
    /// HTML fragment placed in the message block.
    pub content: String,
    /// Optional call-to-action rendered as a button: (label, link).
    pub button: Option<(String, String)>,
}

/// Renders the site-wide email layout: branded header, greeting, content
/// block, optional button, divider and footer.
pub fn render(data: &TemplateData) -> String {
    let button_block = match &data.button {
        Some((label, link)) => format!(
            r#"<div style="text-align: center;">
        <a href="{link}" style="display: inline-block; background: linear-gradient(135deg, #3b82f6, #1d4ed8); color: white; text-decoration: none; padding: 12px 25px; border-radius: 5px; font-weight: bold; margin: 20px 0;">{label}</a>
      </div>"#
        ),
        None => String::new(),
    };
    let year = Utc::now().year();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; background-color: #f5f5f5;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #3b82f6, #1d4ed8); color: white; padding: 30px 20px; text-align: center; border-radius: 10px 10px 0 0;">
      <div style="color: #22c55e; font-size: 28px; font-weight: bold; margin-bottom: 15px; text-transform: uppercase; letter-spacing: 1px;">Uttarakhand Road Trips</div>
      <h1 style="margin: 0; font-size: 24px; font-weight: 700;">{title}</h1>
    </div>
    <div style="background-color: white; padding: 30px 20px; border-radius: 0 0 10px 10px;">
      <div style="font-size: 18px; margin-bottom: 20px; color: #1e40af;">{greeting}</div>
      <div style="margin-bottom: 30px;">{content}</div>
      {button_block}
      <div style="height: 1px; background-color: #e5e7eb; margin: 20px 0;"></div>
      <div style="text-align: center; margin-top: 30px; font-size: 14px; color: #666;">
        <p>Thank you for choosing Uttarakhand Road Trips</p>
        <p>For any queries, please contact us at +91 9454534818</p>
        <p>&copy; {year} Uttarakhand Road Trips. All rights reserved.</p>
      </div>
    </div>
  </div>
</body>
</html>"#,
        title = data.title,
        greeting = data.greeting,
        content = data.content,
        button_block = button_block,
        year = year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(button: Option<(String, String)>) -> TemplateData {
        TemplateData {
            title: "Booking Confirmation".to_string(),
            greeting: "Hello!".to_string(),
            content: "<p>Your trip is booked.</p>".to_string(),
            button,
        }
    }

    #[test]
    fn renders_title_greeting_and_content() {
        let html = render(&sample(None));
        assert!(html.contains("Booking Confirmation"));
        assert!(html.contains("Hello!"));
        assert!(html.contains("<p>Your trip is booked.</p>"));
    }

    #[test]
    fn button_block_only_appears_when_requested() {
        let without = render(&sample(None));
        assert!(!without.contains("<a href="));

        let with = render(&sample(Some((
            "View Booking".to_string(),
            "https://example.com/booking".to_string(),
        ))));
        assert!(with.contains(r#"<a href="https://example.com/booking""#));
        assert!(with.contains("View Booking"));
    }

    #[test]
    fn footer_carries_the_current_year() {
        let html = render(&sample(None));
        assert!(html.contains(&Utc::now().year().to_string()));
    }
}
