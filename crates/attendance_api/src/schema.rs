use async_graphql::{Context, EmptySubscription, ID, Object, Result as GqlResult, Schema};
use std::sync::Arc;
use tokio::sync::RwLock;

use attendance::adapters::in_memory::in_memory_participant_store::InMemoryParticipantStore;
use attendance::application::command_handlers::add_participant::AddParticipantHandler;
use attendance::application::command_handlers::remove_participant::RemoveParticipantHandler;
use attendance::application::command_handlers::toggle_attendance::{
    ToggleAttendanceHandler, ToggleOutcome,
};
use attendance::application::errors::ActionError;
use attendance::application::session::Session;
use attendance::core::config::AppConfig;
use attendance::core::participant::Participant;
use attendance::core::views::{filter_by_name, perfect_attendance};

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlParticipant {
    pub id: String,
    pub name: String,
    pub attendance: Vec<bool>,
}

impl From<Participant> for GqlParticipant {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            attendance: p.attendance,
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlPerfectAttendanceReport {
    pub total_sign_ins: u64,
    pub total_participants: u64,
    pub participants: Vec<GqlParticipant>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: Arc<RwLock<Session>>,
    pub add_handler: Arc<AddParticipantHandler<InMemoryParticipantStore>>,
    pub toggle_handler: Arc<ToggleAttendanceHandler<InMemoryParticipantStore>>,
    pub remove_handler: Arc<RemoveParticipantHandler<InMemoryParticipantStore>>,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn participants(
        &self,
        context: &Context<'_>,
        filter: Option<String>,
    ) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let session = state.session.read().await;
        let list = filter_by_name(session.participants(), filter.as_deref().unwrap_or(""));
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn perfect_attendance_report(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<GqlPerfectAttendanceReport> {
        let state = context.data_unchecked::<AppState>();
        let session = state.session.read().await;
        let report = perfect_attendance(session.participants());
        Ok(GqlPerfectAttendanceReport {
            total_sign_ins: state.config.total_sign_ins as u64,
            total_participants: session.participants().len() as u64,
            participants: report.into_iter().map(Into::into).collect(),
        })
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_participant(&self, context: &Context<'_>, name: String) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state.session.write().await.clear_store_error();
        let current = state.session.read().await.participants().to_vec();
        match state.add_handler.handle(&name, &current).await {
            Ok(id) => Ok(ID(id)),
            Err(error) => Err(surface(state, error).await),
        }
    }

    /// Returns `true` when the flip was submitted; `false` when the id no
    /// longer resolves and the call was a no-op.
    async fn toggle_attendance(
        &self,
        context: &Context<'_>,
        participant_id: ID,
        sign_in_index: u32,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.session.write().await.clear_store_error();
        let current = state.session.read().await.participants().to_vec();
        match state
            .toggle_handler
            .handle(participant_id.as_str(), sign_in_index as usize, &current)
            .await
        {
            Ok(outcome) => Ok(outcome == ToggleOutcome::Submitted),
            Err(error) => Err(surface(state, error).await),
        }
    }

    async fn remove_participant(&self, context: &Context<'_>, participant_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.session.write().await.clear_store_error();
        match state.remove_handler.handle(participant_id.as_str()).await {
            Ok(()) => Ok(true),
            Err(error) => Err(surface(state, error).await),
        }
    }
}

/// A failed write leaves a transient notice on the session, matching the
/// snapshot loop's own fault handling. Validation failures stay local.
async fn surface(state: &AppState, error: ActionError) -> async_graphql::Error {
    if let ActionError::Store(cause) = &error {
        state.session.write().await.record_store_error(cause.clone());
    }
    async_graphql::Error::new(error.to_string())
}

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[cfg(test)]
mod schema_tests {
    use super::*;
    use attendance::core::ports::{ParticipantStore, Subscription};

    async fn make_test_state() -> (AppSchema, Arc<RwLock<Session>>, Subscription) {
        let config = AppConfig::new(6, 50).unwrap();
        let store = Arc::new(InMemoryParticipantStore::new());
        let subscription = store.subscribe().await.unwrap();
        let session = Arc::new(RwLock::new(Session::new(&config)));
        let state = AppState {
            config,
            session: session.clone(),
            add_handler: Arc::new(AddParticipantHandler::new(config, store.clone())),
            toggle_handler: Arc::new(ToggleAttendanceHandler::new(config, store.clone())),
            remove_handler: Arc::new(RemoveParticipantHandler::new(store.clone())),
        };
        let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
            .data(state)
            .finish();
        (schema, session, subscription)
    }

    async fn pump(session: &Arc<RwLock<Session>>, subscription: &mut Subscription) {
        let event = subscription.next().await.expect("expected a store event");
        session.write().await.apply(event);
    }

    #[tokio::test]
    async fn it_should_add_and_list_participants() {
        let (schema, session, mut subscription) = make_test_state().await;
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"mutation { addParticipant(name: "Tom") }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"{ participants(filter: "to") { name attendance } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["participants"][0]["name"], "Tom");
        assert_eq!(
            data["participants"][0]["attendance"],
            serde_json::json!([false, false, false, false, false, false])
        );
    }

    #[tokio::test]
    async fn it_should_reject_a_duplicate_name_with_a_readable_message() {
        let (schema, session, mut subscription) = make_test_state().await;
        pump(&session, &mut subscription).await;

        schema
            .execute(r#"mutation { addParticipant(name: "Amy") }"#)
            .await;
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"mutation { addParticipant(name: "amy") }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("already exists"));
    }

    #[tokio::test]
    async fn it_should_report_perfect_attendance() {
        let (schema, session, mut subscription) = make_test_state().await;
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"mutation { addParticipant(name: "Amy") }"#)
            .await;
        let data = response.data.into_json().unwrap();
        let id = data["addParticipant"].as_str().unwrap().to_string();
        pump(&session, &mut subscription).await;

        for index in 0..6 {
            let mutation = format!(
                r#"mutation {{ toggleAttendance(participantId: "{id}", signInIndex: {index}) }}"#
            );
            let response = schema.execute(&mutation).await;
            assert!(response.errors.is_empty(), "{:?}", response.errors);
            pump(&session, &mut subscription).await;
        }

        let response = schema
            .execute(
                r#"{ perfectAttendanceReport { totalSignIns totalParticipants participants { name } } }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        let report = &data["perfectAttendanceReport"];
        assert_eq!(report["totalSignIns"], 6);
        assert_eq!(report["totalParticipants"], 1);
        assert_eq!(report["participants"][0]["name"], "Amy");
    }

    #[tokio::test]
    async fn it_should_return_false_when_toggling_an_unknown_participant() {
        let (schema, session, mut subscription) = make_test_state().await;
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"mutation { toggleAttendance(participantId: "unknown", signInIndex: 0) }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["toggleAttendance"], false);
    }

    #[tokio::test]
    async fn it_should_remove_a_participant() {
        let (schema, session, mut subscription) = make_test_state().await;
        pump(&session, &mut subscription).await;

        let response = schema
            .execute(r#"mutation { addParticipant(name: "Amy") }"#)
            .await;
        let data = response.data.into_json().unwrap();
        let id = data["addParticipant"].as_str().unwrap().to_string();
        pump(&session, &mut subscription).await;

        let mutation = format!(r#"mutation {{ removeParticipant(participantId: "{id}") }}"#);
        let response = schema.execute(&mutation).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        pump(&session, &mut subscription).await;

        let response = schema.execute(r#"{ participants { id } }"#).await;
        let data = response.data.into_json().unwrap();
        assert_eq!(data["participants"], serde_json::json!([]));
    }
}
