//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::store::AuthStore;
use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::route_guard::RequireRole;
use crate::components::toast::ToastStack;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, classes::ClassesPage, community::CommunityPage,
    dashboard::DashboardPage, forbidden::ForbiddenPage, home::HomePage, login::LoginPage,
    register::RegisterPage, trainer_dashboard::TrainerDashboardPage, trainers::TrainersPage,
};
use crate::state::auth::Role;
use crate::state::ui::{ToastState, UiState};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store and UI state contexts, wires the identity
/// provider watch, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new();
    auth.init();
    provide_context(auth);

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(RwSignal::new(ToastState::default()));

    // Apply the persisted theme once the client is up.
    Effect::new(move || {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fitpulse.css"/>
        <Title text="FitPulse"/>

        <Router>
            <NavBar/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("classes") view=ClassesPage/>
                    <Route path=StaticSegment("trainers") view=TrainersPage/>
                    <Route path=StaticSegment("community") view=CommunityPage/>
                    <Route path=StaticSegment("forbidden") view=ForbiddenPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! {
                            <RequireRole>
                                <DashboardPage/>
                            </RequireRole>
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("trainer"))
                        view=|| view! {
                            <RequireRole role=Role::Trainer>
                                <TrainerDashboardPage/>
                            </RequireRole>
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"))
                        view=|| view! {
                            <RequireRole role=Role::Admin>
                                <AdminDashboardPage/>
                            </RequireRole>
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}
