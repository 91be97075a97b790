// Copyright 2025 Huddle Contributors
// Licensed under MIT OR Apache-2.0
//
// Component tests for the upcoming-meeting screen.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use huddle_ui::components::upcoming_meeting::UpcomingMeeting;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn shows_start_time_and_description() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <UpcomingMeeting
                    starts_at={"6/2/2025, 9:00:00 AM".to_string()}
                    description={Some("Quarterly review".to_string())} />
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("This meeting has not started yet"));
    assert!(text.contains("6/2/2025, 9:00:00 AM"));
    assert!(text.contains("Quarterly review"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn description_line_absent_when_unset() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <UpcomingMeeting starts_at={"6/2/2025, 9:00:00 AM".to_string()} />
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(mount
        .query_selector(".upcoming-description")
        .unwrap()
        .is_none());

    cleanup(&mount);
}
