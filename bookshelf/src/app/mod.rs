use bookshelf_shared::{
    urls::{HOME_ROUTE, PICKUP_SCHEDULE_ROUTE},
    ClientSettings,
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

use schedules::PickupSchedulePage;
use search::BookSearchPage;

mod schedules;
mod search;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-gray-100 text-gray-800">
                <App />
            </body>
        </html>
    }
}

/// Settings from the server config that the browser needs, loaded once per page load
pub(crate) type ClientSettingsResource = Resource<Result<ClientSettings, ServerFnError>>;

#[server]
pub async fn get_client_settings() -> Result<ClientSettings, ServerFnError> {
    let config = use_context::<std::sync::Arc<bookshelf_server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    Ok(config.client_settings.clone())
}

/// Fall back to the defaults when the settings cannot be loaded
pub(crate) fn settings_or_default(
    settings: Result<ClientSettings, ServerFnError>,
) -> ClientSettings {
    settings.unwrap_or_else(|e| {
        leptos::logging::error!("Unable to load client settings, using defaults: {e}");
        ClientSettings::default()
    })
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) enum TopLevelPosition {
    Home,
    PickupSchedule,
    None,
}

const NAVBAR_BUTTON_CLASSES: &str =
    "text-white px-4 py-2 rounded-lg transition duration-200 hover:bg-blue-700";
#[component]
fn NavBarButton(
    to: &'static str,
    top_level_pos: ReadSignal<TopLevelPosition>,
    children: Children,
    active_state: &'static TopLevelPosition,
) -> impl IntoView {
    view! {
        <a
            class=NAVBAR_BUTTON_CLASSES
            class=(["bg-blue-800", "font-semibold"], move || top_level_pos.read() == *active_state)
            href=to
        >
            {children()}
        </a>
    }
}

#[component]
fn NavBar(top_level_pos: ReadSignal<TopLevelPosition>) -> impl IntoView {
    view! {
        <nav class="bg-blue-600 p-4">
            <div class="container mx-auto flex justify-between items-center">
                <h1 class="text-lg font-bold text-white">"Library App"</h1>
                <div class="space-x-4">
                    <NavBarButton
                        to=HOME_ROUTE
                        top_level_pos=top_level_pos
                        active_state=&TopLevelPosition::Home
                    >
                        "Home"
                    </NavBarButton>
                    <NavBarButton
                        to=PICKUP_SCHEDULE_ROUTE
                        top_level_pos=top_level_pos
                        active_state=&TopLevelPosition::PickupSchedule
                    >
                        "Pickup Schedule"
                    </NavBarButton>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let client_settings: ClientSettingsResource =
        Resource::new(|| (), |_| get_client_settings());
    provide_context(client_settings);

    // will be set on page load by the top level routes
    let (top_level_pos, set_top_level_pos) = signal(TopLevelPosition::None);
    provide_context(set_top_level_pos);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bookshelf.css" />

        // sets the document title
        <Title text="Library App" />
        <Meta name="description" content="Search the library catalog and schedule book pickups" />

        <Router>
            <NavBar top_level_pos=top_level_pos />
            <main class="container mx-auto mt-6">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BookSearchPage />
                    <Route path=path!("pickup-schedule") view=PickupSchedulePage />
                </Routes>
            </main>
        </Router>
    }
}
