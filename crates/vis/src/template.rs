use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::render::error::RenderError;

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = include_str!("./template/page.html.tt");

const STYLE: &str = "
body { margin: 0; font-family: system-ui, sans-serif; color: #222; background: #f7f7f9; }
.dashboard { max-width: 1400px; margin: 0 auto; padding: 24px; }
.title { text-align: center; margin-bottom: 8px; }
.caption { text-align: center; color: #666; margin-top: 0; }
.charts-row { display: flex; flex-wrap: wrap; gap: 24px; margin-bottom: 24px; }
.chart-box { flex: 1 1 360px; background: #fff; border-radius: 8px; padding: 16px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
.chart-box h2 { font-size: 1.1rem; margin: 0 0 8px; }
.status { text-align: center; font-size: 1.2rem; color: #666; }
";

/// The HTML shell every page is rendered into.
pub(crate) struct PageTemplate {
    template: TinyTemplate<'static>,
}

impl PageTemplate {
    pub fn new() -> Result<PageTemplate, RenderError> {
        let mut template = TinyTemplate::new();
        template.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        Ok(Self { template })
    }

    pub fn render(&self, context: &PageContext<'_>) -> Result<String, RenderError> {
        let page = self.template.render(PAGE_TEMPLATE_NAME, context)?;
        Ok(page)
    }
}

#[derive(Serialize)]
pub(crate) struct PageContext<'a> {
    title: &'a str,
    caption: Option<&'a str>,
    scripts: bool,
    style: &'static str,
    body: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(title: &'a str, caption: Option<&'a str>, scripts: bool, body: &'a str) -> Self {
        Self {
            title,
            caption,
            scripts,
            style: STYLE,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_page_shell() -> Result<(), RenderError> {
        let template = PageTemplate::new()?;
        let context = PageContext::new("Air <Quality>", Some("Source: a.csv"), true, "<p>body</p>");

        let page = template.render(&context)?;

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Air &lt;Quality&gt;</title>"));
        assert!(page.contains(r#"<p class="caption">Source: a.csv</p>"#));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains("cdn.plot.ly"));
        assert!(page.contains(".chart-box"));

        Ok(())
    }

    #[test]
    fn scripts_and_caption_are_optional() -> Result<(), RenderError> {
        let template = PageTemplate::new()?;
        let context = PageContext::new("Dashboard", None, false, "");

        let page = template.render(&context)?;

        assert!(!page.contains("cdn.plot.ly"));
        assert!(!page.contains("caption\">"));

        Ok(())
    }
}
