// Descripción declarativa de un tween de GSAP

use serde::Serialize;
use serde_json::{json, Map, Value};

/// `gsap.from` o `gsap.to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenKind {
    From,
    To,
}

/// Objetivo del tween dentro de la raíz de la sección
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// El propio elemento raíz
    Root,
    /// Selector CSS; con `gsap.context` se resuelve dentro de la raíz
    Selector(String),
}

/// Bloque `scrollTrigger` de los vars
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerSpec {
    pub trigger: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub toggle_actions: String,
}

impl ScrollTriggerSpec {
    /// Reproducir al entrar en pantalla y revertir al volver hacia arriba
    pub fn on_enter(trigger: &str, start: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            start: start.to_string(),
            end: None,
            toggle_actions: "play none none reverse".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TweenSpec {
    pub kind: TweenKind,
    pub target: Target,
    pub vars: Map<String, Value>,
    pub scroll_trigger: Option<ScrollTriggerSpec>,
}

impl TweenSpec {
    pub fn from(target: Target) -> Self {
        Self::new(TweenKind::From, target)
    }

    pub fn to(target: Target) -> Self {
        Self::new(TweenKind::To, target)
    }

    fn new(kind: TweenKind, target: Target) -> Self {
        Self {
            kind,
            target,
            vars: Map::new(),
            scroll_trigger: None,
        }
    }

    pub fn var(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    pub fn scroll(mut self, trigger: ScrollTriggerSpec) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }

    /// Vars completos tal y como los recibe GSAP
    pub fn vars_json(&self) -> Value {
        let mut vars = self.vars.clone();
        if let Some(trigger) = &self.scroll_trigger {
            let trigger = serde_json::to_value(trigger).unwrap_or_else(|_| json!({}));
            vars.insert("scrollTrigger".to_string(), trigger);
        }
        Value::Object(vars)
    }
}

// ============================================================================
// ANIMACIONES DE LAS SECCIONES
// ============================================================================

/// Título letra a letra, pulso de la lata y partículas flotantes
pub fn hero_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::to(Target::Selector(".hero-can".into()))
            .var("scale", 1.05)
            .var("filter", "brightness(1.1)")
            .var("duration", 2)
            .var("repeat", -1)
            .var("yoyo", true)
            .var("ease", "sine.inOut"),
        TweenSpec::to(Target::Selector(".hero-letter".into()))
            .var("opacity", 1)
            .var("y", 0)
            .var("duration", 0.5)
            .var("stagger", 0.1)
            .var("ease", "back.out"),
        TweenSpec::to(Target::Selector(".energy-particle".into()))
            .var("y", "random(-100, 100)")
            .var("x", "random(-100, 100)")
            .var("opacity", "random(0.3, 1)")
            .var("scale", "random(0.8, 1.2)")
            .var("duration", "random(2, 4)")
            .var("repeat", -1)
            .var("yoyo", true)
            .var("ease", "sine.inOut")
            .var("stagger", 0.1),
    ]
}

/// Revelado de las tarjetas y pulso del fondo
pub fn features_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::from(Target::Selector(".feature-card".into()))
            .var("y", 100)
            .var("opacity", 0)
            .var("duration", 0.8)
            .var("stagger", 0.2)
            .var("ease", "power3.out")
            .scroll(ScrollTriggerSpec::on_enter(".features-grid", "top 80%")),
        TweenSpec::to(Target::Selector(".features-bg-pulse".into()))
            .var("scale", 1.2)
            .var("opacity", 0.5)
            .var("duration", 3)
            .var("repeat", -1)
            .var("yoyo", true)
            .var("ease", "sine.inOut"),
    ]
}

/// Giro del icono al pasar el ratón por una tarjeta de ventajas
pub fn feature_icon_hover(active: bool) -> TweenSpec {
    let (rotate, scale) = if active { (10, 1.2) } else { (0, 1.0) };
    TweenSpec::to(Target::Root)
        .var("rotate", rotate)
        .var("scale", scale)
        .var("duration", 0.3)
        .var("ease", "back.out")
}

/// Contenido, trazado de la línea de circuito y botones
pub fn distribution_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::from(Target::Selector(".distribution-content".into()))
            .var("opacity", 0)
            .var("y", 100)
            .var("duration", 1)
            .var("ease", "power3.out")
            .scroll(ScrollTriggerSpec::on_enter(".distribution-content", "top 70%")),
        TweenSpec::to(Target::Selector(".circuit-line".into()))
            .var("strokeDashoffset", 0)
            .var("duration", 2)
            .var("ease", "power2.inOut")
            .scroll(ScrollTriggerSpec::on_enter(".distribution-content", "top 70%")),
        TweenSpec::from(Target::Selector(".dist-button".into()))
            .var("scale", 0.9)
            .var("opacity", 0)
            .var("duration", 0.5)
            .var("stagger", 0.2)
            .var("ease", "back.out(1.7)")
            .scroll(ScrollTriggerSpec::on_enter(".dist-button", "top 90%")),
    ]
}

/// Título, tarjetas y contenedor del mapa (nunca el interior del mapa)
pub fn partners_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::from(Target::Selector(".partners-title".into()))
            .var("y", 50)
            .var("opacity", 0)
            .var("duration", 1)
            .var("ease", "power3.out")
            .scroll(ScrollTriggerSpec::on_enter(".partners-title", "top 70%")),
        TweenSpec::from(Target::Selector(".partner-card".into()))
            .var("y", 50)
            .var("opacity", 0)
            .var("stagger", 0.2)
            .var("duration", 0.8)
            .var("ease", "back.out(1.4)")
            .scroll(ScrollTriggerSpec::on_enter(".partners-list", "top 80%")),
        TweenSpec::from(Target::Selector(".map-frame".into()))
            .var("scale", 0.9)
            .var("opacity", 0)
            .var("duration", 1)
            .var("ease", "power3.out")
            .scroll(ScrollTriggerSpec::on_enter(".map-frame", "top 80%")),
    ]
}

pub fn testimonials_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::from(Target::Selector(".testimonial-card".into()))
            .var("y", 50)
            .var("opacity", 0)
            .var("stagger", 0.1)
            .var("duration", 0.6)
            .var("ease", "back.out")
            .scroll(ScrollTriggerSpec::on_enter(".testimonials-grid", "top 90%")),
        TweenSpec::to(Target::Selector(".testimonial-glow".into()))
            .var("x", "random(-50, 50)")
            .var("y", "random(-50, 50)")
            .var("opacity", "random(0.4, 0.7)")
            .var("duration", "random(3, 5)")
            .var("repeat", -1)
            .var("yoyo", true)
            .var("ease", "sine.inOut")
            .var("stagger", 0.5),
    ]
}

/// Iconos sociales y brillo del pie
pub fn footer_tweens() -> Vec<TweenSpec> {
    vec![
        TweenSpec::from(Target::Selector(".social-icon".into()))
            .var("y", 20)
            .var("opacity", 0)
            .var("duration", 0.5)
            .var("stagger", 0.1)
            .var("ease", "back.out"),
        TweenSpec::to(Target::Selector(".footer-glow".into()))
            .var("opacity", 0.5)
            .var("duration", 2)
            .var("repeat", -1)
            .var("yoyo", true)
            .var("ease", "sine.inOut"),
    ]
}
