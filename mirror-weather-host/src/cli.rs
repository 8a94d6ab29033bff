use std::path::PathBuf;

use clap::Parser;
use mirror_weather_core::{Config, OpenWeatherClient, Widget};

use crate::mount::FileMount;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "mirror-weather", version, about = "Weather widget for mirror dashboards")]
pub struct Cli {
    /// Path to the TOML configuration file; defaults to the platform config
    /// directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File the rendered page is written to.
    #[arg(long, default_value = "weather.html")]
    pub out: PathBuf,

    /// Run a single fetch-and-render pass and exit.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let cfg = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        cfg.validate()?;

        log::info!(
            "starting weather widget for location {} ({} refresh)",
            cfg.location_id,
            humanize(cfg.interval().as_secs()),
        );

        let source = OpenWeatherClient::new(&cfg)?;
        let mount = FileMount::new(self.out);
        let mut widget = Widget::new(cfg, Box::new(source), mount);

        if self.once {
            widget.setup();
            widget.run_cycle().await;
            return Ok(());
        }

        widget.run().await;
        Ok(())
    }
}

fn humanize(secs: u64) -> String {
    if secs % 60 == 0 { format!("{}m", secs / 60) } else { format!("{secs}s") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_whole_minutes() {
        assert_eq!(humanize(1800), "30m");
        assert_eq!(humanize(60), "1m");
    }

    #[test]
    fn humanize_odd_seconds() {
        assert_eq!(humanize(90), "90s");
    }
}
