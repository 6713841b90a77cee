//! Shared fixtures: gallery markup builders and visibility helpers.

#![allow(dead_code, reason = "Each test binary uses a different subset of helpers")]

use anyhow::{Result, anyhow};
use gallery_dom::{Document, DomFacade};

/// Route `log` output through the test harness.
pub fn init_logging() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Markup for one gallery: a thumbnail grid plus a detail container holding
/// one full-size image and caption per id.
pub fn gallery_markup(name: &str, image_ids: &[&str]) -> String {
    let mut thumbs = String::new();
    let mut figures = String::new();
    for (index, id) in image_ids.iter().enumerate() {
        thumbs.push_str(&format!(
            r#"<img id="thumb-{id}" class="thumb" src="thumbs/{id}.jpg">"#
        ));
        figures.push_str(&format!(
            r#"<figure><img id="{id}" src="full/{id}.jpg"><figcaption id="{name}-caption-{index}">Caption {index}</figcaption></figure>"#
        ));
    }
    format!(
        r#"<section><div id="ig-{name}" class="grid">{thumbs}</div><div id="ig-target-{name}" class="target no-display">{figures}</div></section>"#
    )
}

/// Wrap gallery markup in a full document.
pub fn page(galleries: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Gallery</title></head><body>{}</body></html>",
        galleries.concat()
    )
}

/// Parse a page holding a single gallery.
pub fn single_gallery(name: &str, image_ids: &[&str]) -> Result<Document> {
    Ok(Document::parse(&page(&[gallery_markup(name, image_ids)]))?)
}

/// Whether the element with `id` is rendered according to its inline style.
pub fn displayed(document: &Document, id: &str) -> Result<bool> {
    let key = document
        .get_by_id(id)
        .ok_or_else(|| anyhow!("no element #{id}"))?;
    Ok(document.is_displayed(key)?)
}

/// Whether the element with `id` carries `class`.
pub fn has_class(document: &Document, id: &str, class: &str) -> Result<bool> {
    let key = document
        .get_by_id(id)
        .ok_or_else(|| anyhow!("no element #{id}"))?;
    Ok(document.has_class(key, class)?)
}
