use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::adapters::in_memory::in_memory_participant_store::InMemoryParticipantStore;
use attendance::application::command_handlers::add_participant::AddParticipantHandler;
use attendance::application::command_handlers::remove_participant::RemoveParticipantHandler;
use attendance::application::command_handlers::toggle_attendance::ToggleAttendanceHandler;
use attendance::application::session::{Session, drive};
use attendance::core::config::AppConfig;
use attendance::core::ports::ParticipantStore;

mod schema;
use crate::schema::AppState;
use schema::{AppSchema, MutationRoot, QueryRoot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // A configuration fault is terminal: bail before any store exists.
    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryParticipantStore::new());
    let session = Arc::new(RwLock::new(Session::new(&config)));
    let subscription = store.subscribe().await?;
    tokio::spawn(drive(subscription, session.clone()));

    let state = AppState {
        config,
        session,
        add_handler: Arc::new(AddParticipantHandler::new(config, store.clone())),
        toggle_handler: Arc::new(ToggleAttendanceHandler::new(config, store.clone())),
        remove_handler: Arc::new(RemoveParticipantHandler::new(store.clone())),
    };

    let schema: AppSchema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish();

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
