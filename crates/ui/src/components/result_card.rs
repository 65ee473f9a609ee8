//! Generated logo card: the image plus a download link saving it as `logo.png`.

use dioxus::prelude::*;
use logoforge_client::GenerationClient;

use crate::hooks::use_download_logo;
use crate::state::ResultView;

/// Shows the last generated logo
#[component]
pub fn ResultCard(result: ResultView) -> Element {
    let client = use_context::<GenerationClient>();
    let download = use_download_logo();

    let image_src = client.display_url(&result.image_src);
    let href = client.display_url(&result.download_href);
    let download_url = result.download_href.clone();

    rsx! {
        div {
            class: "mt-8",

            h2 { class: "text-xl font-semibold mb-4", "Generated Logo" }

            div {
                class: "border rounded-lg p-4 bg-white shadow-sm",

                img {
                    class: "w-full h-auto rounded-lg",
                    src: "{image_src}",
                    alt: "Generated logo",
                }

                div {
                    class: "mt-4 flex items-center justify-between",

                    if let Some(at) = &result.generated_at {
                        span { class: "text-sm text-gray-500", "Generated at {at}" }
                    } else {
                        span {}
                    }

                    // The webview cannot save files itself; the click goes
                    // through the native save dialog instead.
                    a {
                        class: "bg-green-600 text-white py-2 px-4 rounded-md hover:bg-green-700",
                        href: "{href}",
                        download: "{result.download_name}",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            download.call(download_url.clone());
                        },
                        "Download"
                    }
                }
            }
        }
    }
}
