use std::sync::Arc;

use cofe_di::Build;
use cofe_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", BASE_TEMPLATE).unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use cofe_templates_contracts::ContactNotificationTemplate;

    use super::*;

    fn sut() -> TemplateServiceImpl {
        TemplateServiceImpl {
            state: Default::default(),
        }
    }

    #[test]
    fn contact_notification() {
        // Act
        let result = sut()
            .render(&ContactNotificationTemplate {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi\nthere".into(),
            })
            .unwrap();

        // Assert
        assert!(result.contains("<h2>New Contact Inquiry</h2>"));
        assert!(result.contains("<p><strong>Name:</strong> Ada</p>"));
        assert!(result.contains("<p><strong>Email:</strong> ada@example.com</p>"));
        assert!(result.contains("<p><strong>Message:</strong><br/>Hi<br>there</p>"));
    }

    #[test]
    fn contact_notification_escapes_input() {
        // Act
        let result = sut()
            .render(&ContactNotificationTemplate {
                name: "<b>Mallory</b>".into(),
                email: "mallory@example.com".into(),
                message: "<script>alert(1)</script>\n&".into(),
            })
            .unwrap();

        // Assert
        assert!(!result.contains("<b>Mallory</b>"));
        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;b&gt;Mallory"));
        assert!(result.contains("&lt;script&gt;alert(1)"));
        assert!(result.contains("<br>&amp;"));
    }
}
