// Copyright 2025 Huddle Contributors
// Licensed under MIT OR Apache-2.0
//
// Component tests for the post-exit page (/meeting/:id/left).

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use huddle_ui::pages::left::LeftPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <BrowserRouter>
            <LeftPage id={"call-42".to_string()} />
        </BrowserRouter>
    }
}

#[wasm_bindgen_test]
async fn left_page_shows_message_and_rejoin_link() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("You left this meeting"));

    let rejoin = mount
        .query_selector(".left-page-rejoin")
        .unwrap()
        .expect("should have a rejoin link");
    assert_eq!(rejoin.text_content().unwrap_or_default(), "Rejoin");
    assert_eq!(
        rejoin.get_attribute("href").unwrap_or_default(),
        "/meeting/call-42"
    );

    cleanup(&mount);
}
