use std::sync::Arc;

use budgetwise_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    budget::{BudgetService, BudgetServiceTrait},
    categories::CategoryRegistry,
    events::DomainEventSink,
    notifications::{NotificationDeliveryTrait, NotificationPolicy},
    suggestions::{RuleBasedSuggestionProvider, SuggestionService, SuggestionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use budgetwise_storage_sqlite::{
    db::{self, DbPool},
    ExpenseRepository, SuggestionRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::{Config, LogFormat},
    domain_events::WebDomainEventSink,
    events::{EventBus, SseNotificationDelivery},
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub suggestion_service: Arc<dyn SuggestionServiceTrait>,
    pub registry: CategoryRegistry,
    pub pool: Arc<DbPool>,
    pub event_bus: EventBus,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let suggestion_repository = Arc::new(SuggestionRepository::new(pool.clone(), writer));

    let event_bus = EventBus::new(config.event_buffer);
    let domain_event_sink = Arc::new(WebDomainEventSink::new());
    domain_event_sink.start_worker(event_bus.clone());
    let event_sink: Arc<dyn DomainEventSink> = domain_event_sink;
    let notification_delivery: Arc<dyn NotificationDeliveryTrait> =
        Arc::new(SseNotificationDelivery::new(event_bus.clone()));

    // Shared so salary changes reset the baseline admissions compare against.
    let notification_policy = Arc::new(NotificationPolicy::new());

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        notification_policy.clone(),
        event_sink.clone(),
    ));
    let budget_service = Arc::new(BudgetService::new(
        user_repository.clone(),
        expense_repository.clone(),
        notification_policy,
        notification_delivery,
        event_sink,
    ));
    let analytics_service = Arc::new(AnalyticsService::new(
        user_repository.clone(),
        expense_repository.clone(),
    ));
    let suggestion_service = Arc::new(SuggestionService::new(
        user_repository,
        expense_repository,
        suggestion_repository,
        Arc::new(RuleBasedSuggestionProvider::new()),
    ));

    Ok(Arc::new(AppState {
        user_service,
        budget_service,
        analytics_service,
        suggestion_service,
        registry: CategoryRegistry::new(),
        pool,
        event_bus,
    }))
}
