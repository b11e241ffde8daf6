//! Extraction form page component

use dioxus::prelude::*;

use crate::api;
use crate::components::ResultList;
use crate::state::ExtractionResults;

/// Home page - paste text, extract emails and phone numbers
#[component]
pub fn Home() -> Element {
    let mut input_text = use_signal(String::new);
    let mut results = use_signal(ExtractionResults::default);
    let mut is_extracting = use_signal(|| false);

    let handle_submit = move |_| {
        let text = input_text();

        // No guard on pending requests or empty input: every submit sends
        // the text as-is. Overlapping requests race and the last response
        // to arrive wins.
        spawn(async move {
            is_extracting.set(true);

            let outcome = api::default_client().extract(text).await;
            if let Err(err) = &outcome {
                tracing::warn!("extraction request failed: {err}");
            }
            results.with_mut(|state| state.apply(outcome));

            is_extracting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-2xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Text Extractor"
                    }
                    p {
                        class: "text-gray-600",
                        "Paste any text and pull out the email addresses and phone numbers."
                    }
                }
            }

            // Form
            main {
                class: "max-w-2xl mx-auto px-4 py-8 space-y-6",

                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                    onsubmit: handle_submit,

                    textarea {
                        value: "{input_text}",
                        oninput: move |e| input_text.set(e.value()),
                        placeholder: "Enter text here...",
                        rows: "10",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none"
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                        if is_extracting() {
                            "Extracting..."
                        } else {
                            "Extract Emails & Phones"
                        }
                    }
                }

                if let Some(err) = results().error {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "{err}"
                    }
                }

                ResultList { title: "Emails", items: results().emails }
                ResultList { title: "Phones", items: results().phones }
            }
        }
    }
}
