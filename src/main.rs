#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio::error::SiteError> {
    use leptos::prelude::*;
    use portfolio::{error::SiteError, server::router};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
