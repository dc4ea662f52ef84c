#[cfg(feature = "ssr")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "portfolio_site=info,tower_http=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, content::portfolio};
    use tower_http::{services::ServeDir, trace::TraceLayer};

    init_tracing();

    // Embedded content must parse before anything is served
    let content = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Couldn't load portfolio content: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        owner = %content.site.owner,
        timeline = content.timeline.len(),
        skills = content.skills.len(),
        projects = content.projects.len(),
        "loaded portfolio content"
    );

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let mut app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell));

    // Assets are referenced under the deployment base path, so mirror the site root there
    let base = content.site.base_path.trim_end_matches('/');
    if !base.is_empty() {
        app = app.nest_service(base, ServeDir::new(&*leptos_options.site_root));
    }

    let app = app
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
