use crate::dom::Scene;
use crate::engine::{Advance, TweenAnimator};
use web_sys as web;

/// Writes rendered tween state to the scene: CSS transforms on cubes and
/// background colors on faces. Only cells touched by the last advance are
/// written.
pub struct SceneRenderer {
    cubes: Vec<web::HtmlElement>,
    faces: Vec<Vec<web::HtmlElement>>,
}

impl SceneRenderer {
    pub fn new(scene: &Scene) -> Self {
        Self {
            cubes: scene.cubes.clone(),
            faces: scene.faces.clone(),
        }
    }

    pub fn write(&self, advance: &Advance, tweens: &TweenAnimator) {
        for &i in &advance.rotated {
            if let (Some(el), Some(v)) = (self.cubes.get(i), tweens.visual_at(i)) {
                let transform = format!(
                    "rotateX({:.3}deg) rotateY({:.3}deg)",
                    v.rotation.x, v.rotation.y
                );
                _ = el.style().set_property("transform", &transform);
            }
        }
        for &i in &advance.recolored {
            if let (Some(faces), Some(v)) = (self.faces.get(i), tweens.visual_at(i)) {
                let color = v.face.to_css();
                for face in faces {
                    _ = face.style().set_property("background-color", &color);
                }
            }
        }
    }
}
