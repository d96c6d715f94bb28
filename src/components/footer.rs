//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"FitPulse"</span>
                <p>"Train smarter. Move better."</p>
            </div>
            <nav class="footer__links">
                <A href="/classes">"Classes"</A>
                <A href="/trainers">"Trainers"</A>
                <A href="/community">"Community"</A>
            </nav>
            <p class="footer__copy">"© 2026 FitPulse"</p>
        </footer>
    }
}
