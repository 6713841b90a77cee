//! Registry lookup, capacity and construction failure behaviour.

mod common;

use anyhow::{Result, anyhow};
use common::{gallery_markup, init_logging, page, single_gallery};
use gallery_dom::{Document, DomFacade};
use image_grid::{
    DEFAULT_CAPACITY_LIMIT, ElementKey, GridConfig, GridError, ImageGrid, ImageGridRegistry,
};

/// A page with `count` galleries named `g0`, `g1`, ...
fn many_galleries(count: usize) -> Result<Document> {
    let galleries: Vec<String> = (0..count)
        .map(|index| gallery_markup(&format!("g{index}"), &[format!("g{index}-img").as_str()]))
        .collect();
    Ok(Document::parse(&page(&galleries))?)
}

#[test]
fn same_name_returns_the_same_instance() -> Result<()> {
    init_logging();
    let mut document = single_gallery("vacation", &["photo-0", "photo-1"])?;
    let mut registry = ImageGridRegistry::default();

    let first: *const ImageGrid = registry.instance("vacation", &document)?;

    // Markup changes after creation are not picked up by later lookups.
    let target = document
        .get_by_id("ig-target-vacation")
        .ok_or_else(|| anyhow!("missing target"))?;
    document.set_inner_html(target, r#"<img id="late"><p id="vacation-caption-0"></p>"#)?;

    let second = registry.instance("vacation", &document)?;
    assert!(core::ptr::eq(first, second));
    assert_eq!(second.image_count(), 2);
    assert_eq!(registry.len(), 1);
    Ok(())
}

#[test]
fn creation_stops_at_the_limit() -> Result<()> {
    let document = many_galleries(4)?;
    let mut registry = ImageGridRegistry::new(GridConfig::new(3, true, "no-display"));
    for index in 0..3 {
        registry.instance(&format!("g{index}"), &document)?;
    }
    let error = registry.instance("g3", &document).err();
    assert!(matches!(
        error,
        Some(GridError::CapacityExceeded { ref name, limit: 3 }) if name == "g3"
    ));
    assert_eq!(registry.len(), 3);
    assert!(!registry.contains("g3"));

    // Existing grids stay reachable when the registry is full.
    assert_eq!(registry.instance("g1", &document)?.name(), "g1");
    Ok(())
}

#[test]
fn default_limit_allows_exactly_twenty_five() -> Result<()> {
    let document = many_galleries(DEFAULT_CAPACITY_LIMIT + 1)?;
    let mut registry = ImageGridRegistry::default();
    assert_eq!(registry.limit(), 25);
    for index in 0..DEFAULT_CAPACITY_LIMIT {
        registry.instance(&format!("g{index}"), &document)?;
    }
    let overflow = format!("g{DEFAULT_CAPACITY_LIMIT}");
    let result = registry.instance(&overflow, &document).map(|grid| grid.name().to_owned());
    match result {
        Err(error @ GridError::CapacityExceeded { .. }) => assert_eq!(
            error.to_string(),
            "Can't create ImageGrid g25 because it would exceed IMAGE_GRID_LIMIT=25."
        ),
        other => return Err(anyhow!("expected capacity error, got {other:?}")),
    }
    assert_eq!(registry.len(), DEFAULT_CAPACITY_LIMIT);
    Ok(())
}

#[test]
fn missing_containers_fail_fast() -> Result<()> {
    let document = single_gallery("vacation", &["photo-0"])?;
    let mut registry = ImageGridRegistry::default();

    let missing_grid = registry.instance("beach", &document).err();
    assert!(matches!(
        missing_grid,
        Some(GridError::ElementNotFound { key: ElementKey::Grid(_), .. })
    ));

    let no_target = Document::parse(r#"<div id="ig-solo"></div>"#)?;
    let missing_target = registry.instance("solo", &no_target).err();
    assert!(matches!(
        missing_target,
        Some(GridError::ElementNotFound { key: ElementKey::Target(_), .. })
    ));
    assert!(registry.is_empty());
    Ok(())
}

#[test]
fn missing_caption_fails_with_its_key() -> Result<()> {
    let document = Document::parse(
        r#"<div id="ig-art"></div>
           <div id="ig-target-art">
             <img id="a0"><p id="art-caption-0"></p>
             <img id="a1">
           </div>"#,
    )?;
    let mut registry = ImageGridRegistry::default();
    let result = registry.instance("art", &document);
    match result {
        Err(GridError::ElementNotFound { grid, key }) => {
            assert_eq!(grid, "art");
            assert_eq!(key, ElementKey::caption("art", 1));
            assert_eq!(key.element_id(), "art-caption-1");
        }
        Err(other) => return Err(other.into()),
        Ok(_) => return Err(anyhow!("expected missing caption")),
    }
    assert!(!registry.contains("art"));
    Ok(())
}

#[test]
fn empty_grid_without_images_is_valid() -> Result<()> {
    let mut document = single_gallery("empty", &[])?;
    let mut registry = ImageGridRegistry::default();
    let grid = registry.instance("empty", &document)?;
    assert_eq!(grid.image_count(), 0);
    grid.open_image(&mut document, "anything")?;
    assert_eq!(grid.open_index(), None);
    grid.close_image(&mut document)?;
    Ok(())
}

#[test]
fn empty_name_is_rejected() -> Result<()> {
    let document = single_gallery("vacation", &["photo-0"])?;
    let mut registry = ImageGridRegistry::default();
    assert!(matches!(registry.instance("", &document), Err(GridError::EmptyName)));
    assert!(registry.is_empty());
    Ok(())
}

#[test]
fn registries_are_isolated() -> Result<()> {
    let document = many_galleries(2)?;
    let mut first = ImageGridRegistry::new(GridConfig::new(1, false, "no-display"));
    let mut second = ImageGridRegistry::new(GridConfig::new(1, false, "no-display"));
    first.instance("g0", &document)?;
    second.instance("g1", &document)?;
    assert_eq!(first.names(), vec!["g0"]);
    assert_eq!(second.names(), vec!["g1"]);
    assert!(matches!(
        first.instance("g1", &document),
        Err(GridError::CapacityExceeded { limit: 1, .. })
    ));
    Ok(())
}

#[test]
fn custom_hidden_class_is_used() -> Result<()> {
    let mut document = single_gallery("vacation", &["photo-0"])?;
    let mut registry = ImageGridRegistry::new(GridConfig::new(5, false, "is-open"));
    let grid = registry.instance("vacation", &document)?;
    grid.open_image(&mut document, "photo-0")?;
    assert!(common::has_class(&document, "ig-target-vacation", "is-open")?);
    assert!(common::has_class(&document, "ig-target-vacation", "no-display")?);
    grid.close_image(&mut document)?;
    assert!(!common::has_class(&document, "ig-target-vacation", "is-open")?);
    Ok(())
}

#[test]
fn multi_word_hidden_class_falls_back_to_default() -> Result<()> {
    let mut document = single_gallery("vacation", &["photo-0"])?;
    let mut registry = ImageGridRegistry::new(GridConfig::new(5, false, "is open"));
    assert_eq!(registry.config().hidden_class, "no-display");
    let grid = registry.instance("vacation", &document)?;
    for _ in 0..3 {
        grid.open_image(&mut document, "photo-0")?;
        grid.close_image(&mut document)?;
    }
    let target = grid.target_element();
    assert_eq!(document.attribute(target, "class"), Some("target no-display"));
    Ok(())
}
