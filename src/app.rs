use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::tcmb::RateFeedClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AboutPage, CalculatorPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Rate fetch trigger; the calculator page queues a currency code here.
    let rate_request = use_signal(|| None::<String>);
    use_context_provider(|| rate_request.clone());

    let _rate = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let rate_request = rate_request.clone();
        move || async move { fetch_rate(state.clone(), toasts.clone(), rate_request.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn fetch_rate(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut rate_request: Signal<Option<String>>,
) -> Option<f64> {
    let Some(code) = rate_request() else {
        return None;
    };

    // The trigger is disabled while a fetch is in flight; a request that
    // slips through anyway is dropped here instead of queueing.
    if !state.with_mut(|st| st.start_rate_fetch()) {
        rate_request.set(None);
        return None;
    }

    let Ok(client) = RateFeedClient::new() else {
        rate_request.set(None);
        state.with_mut(|st| {
            st.finish_rate_fetch(Err("failed to initialise rate feed client".to_string()))
        });
        push_toast(
            toasts.clone(),
            ToastKind::Error,
            "Failed to initialise the rate feed client.",
        );
        return None;
    };

    println!("Fetching {code} buying rate from {}", client.feed_url());
    let result = client.fetch_usd_buying().await;
    rate_request.set(None);

    // finish_rate_fetch clears the busy indicator on both paths.
    match result {
        Ok(quote) => {
            let rate = quote.forex_buying;
            state.with_mut(|st| st.finish_rate_fetch(Ok(quote)));
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Fetched USD buying rate: {rate:.4}"),
            );
            Some(rate)
        }
        Err(err) => {
            println!("Rate feed request failed: {err}");
            let message = err.to_string();
            state.with_mut(|st| st.finish_rate_fetch(Err(message.clone())));
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Failed to fetch rate: {message}"),
            );
            None
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
