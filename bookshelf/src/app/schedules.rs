//! The listing of all pickup schedules known to the backend

use bookshelf_components::{
    cards::ScheduleCard, icons::PageSpinner, services::get_pickup_schedules, CARD_GRID_CLASSES,
};
use bookshelf_shared::{
    schedules::{ScheduleList, ScheduleListView},
    urls::ApiOrigin,
};
use leptos::{either::EitherOf3, prelude::*};

use crate::app::{settings_or_default, ClientSettingsResource, TopLevelPosition};

#[component]
pub fn PickupSchedulePage() -> impl IntoView {
    let set_top_level_pos =
        use_context::<WriteSignal<TopLevelPosition>>().expect("App provides TopLevelPosition");
    *set_top_level_pos.write() = TopLevelPosition::PickupSchedule;
    let client_settings =
        use_context::<ClientSettingsResource>().expect("App provides client settings");

    view! {
        <div class="container mx-auto p-8 bg-gray-50 min-h-screen">
            <h1 class="text-3xl font-bold text-center text-gray-900 mb-8">
                "Book Pickup Schedules"
            </h1>
            <Suspense fallback=|| view! { <PageSpinner /> }>
                {move || Suspend::new(async move {
                    let settings = settings_or_default(client_settings.await);
                    view! { <PickupScheduleList api_origin=settings.api_origin /> }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn PickupScheduleList(api_origin: ApiOrigin) -> impl IntoView {
    // loading starts with the view, so server and browser render the same spinner
    let mut initial = ScheduleList::default();
    initial.begin_load();
    let schedules = RwSignal::new(initial);

    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        let origin = api_origin.clone();
        leptos::task::spawn_local(async move {
            let res = get_pickup_schedules(&origin).await;
            match schedules.try_update(|s| s.finish_load(res)) {
                Some(Err(e)) => {
                    leptos::logging::error!("Failed to fetch pickup schedules: {e}");
                }
                Some(Ok(_)) | None => {}
            }
        });
    });

    move || {
        schedules.with(|s| match s.view() {
            ScheduleListView::Loading => EitherOf3::A(view! { <PageSpinner /> }),
            ScheduleListView::Empty => EitherOf3::B(view! {
                <div class="flex justify-center items-center">
                    <p class="text-lg text-gray-600">"No pickup schedules found."</p>
                </div>
            }),
            ScheduleListView::Populated(all) => {
                let cards = all
                    .iter()
                    .cloned()
                    .map(|schedule| view! { <ScheduleCard schedule=schedule /> })
                    .collect_view();
                EitherOf3::C(view! { <div class=CARD_GRID_CLASSES>{cards}</div> })
            }
        })
    }
}
