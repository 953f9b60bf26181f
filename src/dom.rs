use crate::engine::{style, CubesConfig, Rect};
use anyhow::{anyhow, Context};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements of a built scene, cubes and faces in row-major cell order.
pub struct Scene {
    pub element: web::HtmlElement,
    pub cubes: Vec<web::HtmlElement>,
    pub faces: Vec<Vec<web::HtmlElement>>,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up the container for `selector`. `Ok(None)` when nothing matches;
/// an invalid selector is an error.
pub fn find_container(selector: &str) -> anyhow::Result<Option<web::Element>> {
    let Some(document) = window_document() else {
        return Ok(None);
    };
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad container selector {selector:?}: {e:?}"))
}

/// Replace the container's contents with the cube grid and collect the
/// elements the renderer writes to.
pub fn build_scene(container: &web::Element, config: &CubesConfig) -> anyhow::Result<Scene> {
    container.set_inner_html(&style::scene_markup(config));
    let element = container
        .query_selector(".cubes-animation--scene")
        .map_err(|e| anyhow!("{e:?}"))?
        .context("scene element missing after build")?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("scene is not an HTMLElement"))?;

    let cubes = html_elements(&element, ".cube")?;
    let expected = config.grid_size * config.grid_size;
    if cubes.len() != expected {
        return Err(anyhow!("expected {expected} cubes, found {}", cubes.len()));
    }
    let faces = cubes
        .iter()
        .map(|cube| html_elements(cube, ".cube-face"))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Scene {
        element,
        cubes,
        faces,
    })
}

fn html_elements(root: &web::Element, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn scene_rect(scene: &web::Element) -> Rect {
    let r = scene.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}
