//! Result list component

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResultListProps {
    pub title: String,
    pub items: Vec<String>,
}

/// Titled list for one extracted result set, rendered in response order.
#[component]
pub fn ResultList(props: ResultListProps) -> Element {
    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg p-6",
            h2 {
                class: "text-lg font-semibold text-gray-900 mb-3",
                "{props.title}"
            }
            ul {
                class: "space-y-1 text-sm text-gray-700",
                for item in props.items {
                    li { "{item}" }
                }
            }
        }
    }
}
