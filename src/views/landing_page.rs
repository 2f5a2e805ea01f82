use yew::prelude::*;

use crate::components::landing::{Distribution, Features, Footer, HeroSection, Partners, Testimonials};

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <main class="min-h-screen bg-black text-white">
            <HeroSection />
            <Features />
            <Distribution />
            <Partners />
            <Testimonials />
            <Footer />
        </main>
    }
}
