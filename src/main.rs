use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::Path;

use elastic_tabs::cli::{CliArgs, OutputFormat};
use elastic_tabs::util::read_document;
use elastic_tabs::{
    compute, render_aligned, CharCount, DisplayColumns, ElasticConfig, FontMeasure, LayoutResult,
    Measure, MeasureKind,
};

fn main() -> Result<()> {
    elastic_tabs::tracing::init();

    let args = CliArgs::parse();
    let base = match &args.config {
        Some(path) => ElasticConfig::load_from_or_default(path)?,
        None => ElasticConfig::load(),
    };
    let config_path = args.config.clone();
    let run = args.into_config(base).map_err(|e| anyhow!(e))?;

    if run.save_config {
        match &config_path {
            Some(path) => run.settings.save_to(path)?,
            None => run.settings.save()?,
        }
    }

    let text = read_input(run.input.as_deref())?;
    let settings = &run.settings;

    // Width of one output column, for turning stops back into spaces
    let (measure, unit): (Box<dyn Measure>, f64) = match settings.measure {
        MeasureKind::Chars => (Box::new(CharCount::new(settings.unit)), settings.unit),
        MeasureKind::Columns => (Box::new(DisplayColumns::new(settings.unit)), settings.unit),
        MeasureKind::Font => {
            let path = settings
                .font
                .as_deref()
                .context("font measuring needs a font path")?;
            let font = FontMeasure::from_path(path, settings.font_size)?;
            let space = font.advance(' ') as f64;
            (Box::new(font), space)
        }
    };

    let layout = compute(&text, measure.as_ref(), &settings.tab_stops);
    tracing::info!(
        lines = layout.len(),
        max_stop = layout.max_stop(),
        "layout complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run.format {
        OutputFormat::Aligned => {
            out.write_all(render_aligned(&text, &layout, measure.as_ref(), unit).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &layout)?;
            writeln!(out)?;
        }
        OutputFormat::Stops => write_stops(&mut out, &layout)?,
    }
    out.flush()?;

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_document(path)
            .with_context(|| format!("Cannot lay out {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
    }
}

fn write_stops(out: &mut impl Write, layout: &LayoutResult) -> io::Result<()> {
    for (index, line) in layout.iter().enumerate() {
        let stops: Vec<String> = line.stops.iter().map(|s| s.to_string()).collect();
        writeln!(out, "{}: {}", index + 1, stops.join(" "))?;
    }
    Ok(())
}
