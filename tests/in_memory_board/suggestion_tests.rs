//! In-process suggestion backend driven through the gateway.

use eyre::{bail, ensure};
use laundry_ai::suggestion::{
    adapters::{InProcessSuggestionBackend, LOCAL_PROVIDER, OPENAI_PROVIDER},
    domain::{ProviderId, SUGGESTION_ERROR_MESSAGE, SuggestionState},
    services::SuggestionGateway,
};
use rstest::{fixture, rstest};
use std::sync::Arc;

type Gateway = SuggestionGateway<InProcessSuggestionBackend>;

#[fixture]
fn builtin_backend() -> InProcessSuggestionBackend {
    InProcessSuggestionBackend::with_builtin_providers().expect("built-in providers are valid")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gateway_reports_builtin_registry(
    builtin_backend: InProcessSuggestionBackend,
) -> eyre::Result<()> {
    let gateway: Gateway = SuggestionGateway::new(Arc::new(builtin_backend));

    let registry = gateway.load_providers().await?;

    let names: Vec<&str> = registry.providers().iter().map(ProviderId::as_str).collect();
    ensure!(names == vec![LOCAL_PROVIDER, OPENAI_PROVIDER]);
    ensure!(gateway.active_provider() == Some(ProviderId::new(LOCAL_PROVIDER)?));
    ensure!(gateway.state() == SuggestionState::Idle);
    Ok(())
}

#[rstest]
#[case("weiße Hemden", "Weiße Wäsche")]
#[case("Wool sweater", "Wolle")]
#[case("wash darks", "Standard-Empfehlung")]
#[case("", "Sortiere nach Farbe")]
#[tokio::test(flavor = "multi_thread")]
async fn local_provider_answers_through_gateway(
    builtin_backend: InProcessSuggestionBackend,
    #[case] context: &str,
    #[case] expected_prefix: &str,
) -> eyre::Result<()> {
    let gateway: Gateway = SuggestionGateway::new(Arc::new(builtin_backend));

    let suggestion = gateway.suggest(context).await?;

    ensure!(suggestion.text().starts_with(expected_prefix), "got {}", suggestion.text());
    ensure!(gateway.state().display_text() == suggestion.text());
    ensure!(gateway.active_provider() == Some(ProviderId::new(LOCAL_PROVIDER)?));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_to_placeholder_changes_active_provider(
    builtin_backend: InProcessSuggestionBackend,
) -> eyre::Result<()> {
    let backend = builtin_backend.with_active(ProviderId::new(OPENAI_PROVIDER)?);
    let gateway: Gateway = SuggestionGateway::new(Arc::new(backend));

    let suggestion = gateway.suggest("wash darks").await?;

    ensure!(suggestion.text().contains("'wash darks'"));
    ensure!(gateway.active_provider() == Some(ProviderId::new(OPENAI_PROVIDER)?));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_active_provider_shows_error_message(
    builtin_backend: InProcessSuggestionBackend,
) -> eyre::Result<()> {
    let backend = builtin_backend.with_active(ProviderId::new("mystery")?);
    let gateway: Gateway = SuggestionGateway::new(Arc::new(backend));

    match gateway.suggest("wash darks").await {
        Err(err) => ensure!(err.user_message() == SUGGESTION_ERROR_MESSAGE),
        Ok(suggestion) => bail!("expected failure, got {suggestion:?}"),
    }
    ensure!(gateway.state() == SuggestionState::Ready(SUGGESTION_ERROR_MESSAGE.to_owned()));
    ensure!(gateway.active_provider().is_none());
    Ok(())
}
