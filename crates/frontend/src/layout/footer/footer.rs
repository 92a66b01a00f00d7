use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверяем сервер при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer class="site-footer">
            <img class="site-footer-logo" src="/homemakersFullLogo.svg" alt="Homemakers" />
            <p class="site-footer-text">
                "© 2026 Homemakers Plaza, Inc. | A Berkshire Hathaway Company"
                <span class=move || format!("status-dot {}", status.get().css_class()) />
            </p>
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get("/health").send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
