use crate::layout::Chart;
use crate::layout::Element;
use crate::layout::ElementKind;
use crate::layout::Section;
use crate::layout::Text;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::template::PageContext;
use crate::template::PageTemplate;

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Section(s) => s.render(output),
            ElementKind::Chart(c) => c.render(output),
            ElementKind::Text(t) => t.render(output),
        }
    }
}

impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let mut body = String::new();

        for element in &self.elements {
            element.render(&mut body)?;
        }

        let template = PageTemplate::new()?;
        let context = PageContext::new(
            &self.title,
            self.caption.as_deref(),
            self.has_charts(),
            &body,
        );

        output.write(&template.render(&context)?)
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        output.write(&format!(r#"<div id="{id}" class="charts-row">"#))?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write("</div>")
    }
}

impl Render for Text {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let mut content = String::with_capacity(self.content.len());
        tinytemplate::escape(&self.content, &mut content);

        output.write(&format!(r#"<p id="{id}" class="status">{content}</p>"#))
    }
}

impl Render for Chart {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let mut heading = String::with_capacity(self.heading.len());
        tinytemplate::escape(&self.heading, &mut heading);
        let data = script_json(&self.spec.data)?;
        let layout = script_json(&self.spec.layout)?;

        output.write(&format!(
            r#"
                <div class="chart-box">
                    <h2>{heading}</h2>
                    <div id="{id}"></div>
                    <script>
                        Plotly.newPlot(document.getElementById("{id}"), {data}, {layout}, {{ responsive: true }});
                    </script>
                </div>
            "#,
        ))
    }
}

// Serializes a value for embedding in an inline script. A `</` inside a JSON
// string would close the script element early.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::series::build_series;
    use airprobe_readings::Dataset;
    use airprobe_readings::MetricKey;
    use airprobe_readings::Record;

    fn chart() -> Chart {
        let dataset = Dataset::new(vec![Record::new(None, None, None, Some(22.0), None)]);
        let series = build_series(&dataset, MetricKey::Temperature, Color::rgb(255, 99, 132));
        Chart::line(&series)
    }

    #[test]
    fn render_chart() -> Result<(), RenderError> {
        let chart = chart();
        let mut output = String::new();

        chart.render(&mut output)?;

        let id = chart.id();
        assert!(output.contains("<h2>Temperature (°C)</h2>"));
        assert!(output.contains(&format!(r#"<div id="{id}"></div>"#)));
        assert!(output.contains(&format!(r#"Plotly.newPlot(document.getElementById("{id}"), [{{"type":"scatter""#)));
        assert!(output.contains(r##""fillcolor":"#ff638433""##));

        Ok(())
    }

    #[test]
    fn render_view_with_sections() -> Result<(), RenderError> {
        let view = View::new("Environmental Data Dashboard")
            .caption("Source: readings.csv")
            .add(Section::new().add(chart()).add(chart()));
        let mut output = String::new();

        view.render(&mut output)?;

        assert!(output.contains("<h1 class=\"title\">Environmental Data Dashboard</h1>"));
        assert!(output.contains("class=\"charts-row\""));
        assert_eq!(2, output.matches("class=\"chart-box\"").count());
        assert!(output.contains("cdn.plot.ly"));

        Ok(())
    }

    #[test]
    fn render_text_escapes_content() -> Result<(), RenderError> {
        let view = View::new("Status").add(Text::new("<script>alert(1)</script>"));
        let mut output = String::new();

        view.render(&mut output)?;

        assert!(output.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!output.contains("cdn.plot.ly"));

        Ok(())
    }

    #[test]
    fn render_chart_escapes_heading() -> Result<(), RenderError> {
        let line = chart();
        let chart = Chart::new(r#"<a href="x">&'</a>"#.to_owned(), line.spec);
        let mut output = String::new();

        chart.render(&mut output)?;

        assert!(output.contains("<h2>&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;</h2>"));

        Ok(())
    }

    #[test]
    fn script_json_cannot_close_the_script() -> Result<(), RenderError> {
        assert_eq!(r#"["<\/script>"]"#, script_json(&["</script>"])?);
        Ok(())
    }
}
