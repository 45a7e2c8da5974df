//! Document rendering layer.
//!
//! ## Files
//! - `chunks.rs`: fixed-size sequence grouping helpers for the text template.
//!
//! ## Conventions
//! - Template files are read per call; no ambient engine or helper registry.
//! - Renderers return the full document string; the dispatcher owns stdout.

mod chunks;

pub use chunks::ChunkHelper;

use anyhow::Context;
use handlebars::Handlebars;
use tracing::debug;

use crate::banner::Banner;
use crate::cli::{OutputType, RenderOptions};
use crate::record::ContactRecord;

pub const TEXT_TEMPLATE: &str = "me.txt.hb";
pub const HTML_TEMPLATE: &str = "me.html.hb";

/// Produce the full document for the selected output format.
pub fn document(record: &ContactRecord, opts: &RenderOptions) -> anyhow::Result<String> {
    debug!(format = ?opts.output, "rendering document");
    match opts.output {
        OutputType::Json => to_json(record),
        OutputType::Html => to_html(record),
        OutputType::Text => to_text(record, opts),
    }
}

/// Compact JSON, keys in source order, no trailing newline.
pub fn to_json(record: &ContactRecord) -> anyhow::Result<String> {
    record.to_compact_json()
}

/// Banner of the record's name, newline, rendered text template, newline.
pub fn to_text(record: &ContactRecord, opts: &RenderOptions) -> anyhow::Result<String> {
    let source = read_template(TEXT_TEMPLATE)?;
    let banner = Banner::new()?;
    let title = banner.render(record.name(), opts.color);
    let body = render_text(record, &source)?;
    Ok(format!("{title}\n{body}\n"))
}

/// Rendered HTML template plus one trailing newline. No helpers, no banner.
pub fn to_html(record: &ContactRecord) -> anyhow::Result<String> {
    let source = read_template(HTML_TEMPLATE)?;
    let body = render_html(record, &source)?;
    Ok(format!("{body}\n"))
}

fn render_text(record: &ContactRecord, source: &str) -> anyhow::Result<String> {
    let mut engine = Handlebars::new();
    engine.register_helper("each5", Box::new(ChunkHelper::new(5, ", ")));
    engine.register_helper("each10", Box::new(ChunkHelper::new(10, ", ")));
    engine
        .render_template(source, record.value())
        .context("render text template")
}

fn render_html(record: &ContactRecord, source: &str) -> anyhow::Result<String> {
    let engine = Handlebars::new();
    engine
        .render_template(source, record.value())
        .context("render html template")
}

fn read_template(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read template {path}"))
}
