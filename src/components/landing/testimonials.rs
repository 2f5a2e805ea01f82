// ============================================================================
// TESTIMONIALS - Grid en escritorio, carrusel rotativo en móvil
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animations::tween::testimonials_tweens;
use crate::hooks::use_scroll_animations;
use crate::models::{Testimonial, TESTIMONIALS};

const ROTATION_MS: u32 = 5_000;

/// Índice del carrusel móvil
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Select(i) if i < self.len => i,
            CarouselAction::Select(_) => return self,
        };
        Rc::new(Self { index, len: self.len })
    }
}

fn testimonial_header(testimonial: &Testimonial) -> Html {
    html! {
        <div class="flex items-center mb-4">
            <div class="h-10 w-10 mr-3 rounded-full bg-blue-700 flex items-center justify-center text-white font-bold">
                {testimonial.avatar}
            </div>
            <div>
                <p class="font-bold text-white">{testimonial.name}</p>
                <p class="text-sm text-blue-400">{testimonial.role}</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section_ref = use_node_ref();
    let carousel = use_reducer(|| Carousel {
        index: 0,
        len: TESTIMONIALS.len(),
    });
    use_scroll_animations(section_ref.clone(), testimonials_tweens);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(ROTATION_MS, move || dispatcher.dispatch(CarouselAction::Next));
            move || drop(interval)
        });
    }

    let current = &TESTIMONIALS[carousel.index];

    html! {
        <section ref={section_ref} class="py-20 relative bg-gradient-to-b from-black to-blue-950 overflow-hidden">
            <div class="testimonial-glow absolute left-1/4 top-1/4 w-64 h-64 rounded-full bg-blue-500/20" style="filter: blur(80px);"></div>
            <div class="testimonial-glow absolute right-1/4 bottom-1/4 w-80 h-80 rounded-full bg-yellow-500/20" style="filter: blur(100px);"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold text-white mb-4">{"DEPOIMENTOS"}</h2>
                    <p class="text-blue-300 text-lg max-w-3xl mx-auto">
                        {"Veja o que nossos consumidores estão falando sobre BATS Energy"}
                    </p>
                </div>

                <div class="testimonials-grid hidden md:grid grid-cols-2 lg:grid-cols-4 gap-6 mb-10">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div class="testimonial-card bg-gradient-to-br from-blue-900/20 to-black p-6 rounded-xl border border-blue-800/30 hover:border-blue-500/40 transition-all duration-300">
                            { testimonial_header(testimonial) }
                            <p class="text-blue-100">{testimonial.content}</p>
                        </div>
                    }) }
                </div>

                <div class="md:hidden">
                    <div class="relative overflow-hidden rounded-xl border border-blue-800/30 bg-gradient-to-br from-blue-900/20 to-black p-6">
                        <div class="transition-opacity duration-500">
                            { testimonial_header(current) }
                            <p class="text-blue-100">{current.content}</p>
                        </div>
                    </div>

                    <div class="flex justify-center mt-6 space-x-2">
                        { for (0..TESTIMONIALS.len()).map(|i| {
                            let carousel = carousel.clone();
                            html! {
                                <button
                                    aria-label={format!("Depoimento {}", i + 1)}
                                    class={classes!("w-3", "h-3", "rounded-full", if i == carousel.index { "bg-blue-500" } else { "bg-blue-800" })}
                                    onclick={Callback::from(move |_| carousel.dispatch(CarouselAction::Select(i)))}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(index: usize) -> Rc<Carousel> {
        Rc::new(Carousel { index, len: 4 })
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(carousel(2).reduce(CarouselAction::Next).index, 3);
        assert_eq!(carousel(3).reduce(CarouselAction::Next).index, 0);
    }

    #[test]
    fn select_jumps_to_dot() {
        assert_eq!(carousel(0).reduce(CarouselAction::Select(2)).index, 2);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        assert_eq!(carousel(1).reduce(CarouselAction::Select(9)).index, 1);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let empty = Rc::new(Carousel { index: 0, len: 0 });
        assert_eq!(empty.reduce(CarouselAction::Next).index, 0);
    }

    #[test]
    fn seeded_with_four_testimonials() {
        assert_eq!(TESTIMONIALS.len(), 4);
        assert!(TESTIMONIALS.iter().all(|t| t.avatar.chars().count() == 1));
    }
}
