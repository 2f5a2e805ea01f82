// Animaciones GSAP de una sección: se crean al montar y se revierten al desmontar

use web_sys::Element;
use yew::prelude::*;

use crate::animations::{self, TweenSpec};

#[hook]
pub fn use_scroll_animations(root: NodeRef, tweens: fn() -> Vec<TweenSpec>) {
    use_effect_with(root, move |root| {
        let context = root
            .cast::<Element>()
            .and_then(|element| animations::run(&element, tweens()));
        move || {
            if let Some(context) = context {
                context.revert_all();
            }
        }
    });
}
