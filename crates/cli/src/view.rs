use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use airprobe_readings::HeaderMode;
use airprobe_readings::SourceLocation;
use airprobe_readings::slot::LoadState;
use airprobe_vis::dashboard::Dashboard;
use airprobe_vis::render::output::OutputFile;
use tracing::info;

use crate::cli::ColorOverride;
use crate::cli::PathExt;
use crate::cli::ViewArgs;
use crate::error::CliError;
use crate::load::SourceLoader;
use crate::pipeline::Pipeline;

pub(crate) fn view(args: ViewArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let dashboard = dashboard(args.title, &args.colors);
    let header = if args.no_header {
        HeaderMode::Absent
    } else {
        HeaderMode::Present
    };

    info!(
        source = %args.source,
        output = %output_path.display(),
        "airprobe loads sensor readings and generates a dashboard"
    );

    let loader = SourceLoader::new(Duration::from_secs(args.timeout))?;
    let pipeline = Pipeline::new(loader, header);

    // The placeholder stays on disk until the first dataset is installed.
    write_page(&dashboard, &pipeline.slot().current(), &output_path)?;

    let worker = pipeline.request(SourceLocation::new(&args.source));
    worker.join().map_err(|_| CliError::Worker)?;

    let state = pipeline.slot().current();
    let page = write_page(&dashboard, &state, &output_path)?;

    match state {
        LoadState::Failed { message, .. } => Err(CliError::Failed(message)),
        _ => {
            info!(page = %page.display(), "dashboard generated");
            Ok(())
        }
    }
}

fn dashboard(title: Option<String>, colors: &[ColorOverride]) -> Dashboard {
    let dashboard = match title {
        Some(title) => Dashboard::default().with_title(title),
        None => Dashboard::default(),
    };

    colors.iter().fold(dashboard, |dashboard, color| {
        dashboard.with_color(color.metric, color.color)
    })
}

fn write_page(dashboard: &Dashboard, state: &LoadState, dir: &Path) -> Result<PathBuf, CliError> {
    let mut output = OutputFile::new(dir)?;
    dashboard.render_state(state, &mut output)?;
    Ok(output.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use airprobe_readings::MetricKey;
    use airprobe_vis::color::Color;

    fn args(source: String, output_path: PathBuf) -> ViewArgs {
        ViewArgs {
            source,
            output_path: Some(output_path),
            no_header: false,
            title: Some(String::from("Greenhouse")),
            colors: vec![ColorOverride {
                metric: MetricKey::Co,
                color: Color::rgb(1, 2, 3),
            }],
            timeout: 5,
        }
    }

    #[test]
    fn generate_dashboard_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("readings.csv");
        fs::write(
            &source,
            "pm2_5,co,nh3,temperature,humidity\n10,1,0.5,22,40\n,2,0.6,23,41\n",
        )?;

        view(args(source.display().to_string(), dir.path().to_path_buf()))?;

        let page = fs::read_to_string(dir.path().join("index.html"))?;
        assert!(page.contains("<title>Greenhouse</title>"));
        assert_eq!(5, page.matches("class=\"chart-box\"").count());
        assert!(page.contains(r##""fillcolor":"#01020333""##));
        assert!(page.contains(r#""y":[10.0,null]"#));

        Ok(())
    }

    #[test]
    fn missing_source_writes_the_error_page() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("missing.csv");

        let result = view(args(source.display().to_string(), dir.path().to_path_buf()));

        assert!(matches!(result, Err(CliError::Failed(_))));
        let page = fs::read_to_string(dir.path().join("index.html"))?;
        assert!(page.contains("Could not load the data"));

        Ok(())
    }

    #[test]
    fn title_and_colors_customize_the_dashboard() {
        let colors = [ColorOverride {
            metric: MetricKey::Humidity,
            color: Color::rgb(9, 9, 9),
        }];

        let dashboard = dashboard(Some(String::from("Lab")), &colors);

        assert_eq!("Lab", dashboard.title());
        let humidity = dashboard
            .panels()
            .find(|panel| panel.metric == MetricKey::Humidity)
            .unwrap();
        assert_eq!(Color::rgb(9, 9, 9), humidity.color);
    }
}
