//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Each test provisions its own migrated database. Set `SKIP_TEST_CLUSTER=1`
//! to skip when no cluster can be started.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use user_forms::domain::ports::{UserPersistenceError, UserRepository};
use user_forms::domain::{UserFields, UserId};
use user_forms::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

mod support;

use support::{drop_users_table, handle_cluster_setup_failure, provision_migrated_database};

/// Advances one second per reading so stamps are distinct and whole.
struct SteppingClock {
    start: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().expect("clock poisoned");
        let now = self.start + Duration::seconds(*ticks);
        *ticks += 1;
        now
    }
}

fn stepping_clock() -> Arc<dyn Clock> {
    let start = Utc
        .with_ymd_and_hms(2017, 5, 14, 13, 21, 1)
        .single()
        .expect("valid fixture timestamp");
    Arc::new(SteppingClock {
        start,
        ticks: Mutex::new(0),
    })
}

struct TestContext {
    runtime: Runtime,
    repository: DieselUserRepository,
    database_url: String,
    _database: TemporaryDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_migrated_database(&runtime)?;
    let database_url = database.url().to_string();

    let config = PoolConfig::new(database_url.as_str()).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselUserRepository::with_clock(pool, stepping_clock()),
        database_url,
        _database: database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn insert_then_find_round_trips(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: insert_then_find_round_trips skipped");
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        let inserted = repo
            .insert(&UserFields::new("Ana", "other", "Cobol"))
            .await
            .expect("insert succeeds");
        assert_eq!(inserted.name(), "Ana");
        assert_eq!(inserted.language(), "other");
        assert_eq!(inserted.other_language(), "Cobol");
        assert_eq!(inserted.created_at(), inserted.updated_at());

        let fetched = repo
            .find_by_id(inserted.id())
            .await
            .expect("find succeeds")
            .expect("user exists");
        assert_eq!(fetched, inserted);
    });
}

#[rstest]
fn list_is_ordered_by_id(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_is_ordered_by_id skipped");
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        for name in ["Charlie", "Alice", "Bob"] {
            repo.insert(&UserFields::new(name, "ruby", ""))
                .await
                .expect("insert succeeds");
        }

        let users = repo.list().await.expect("list succeeds");
        let names: Vec<&str> = users.iter().map(|user| user.name()).collect();
        assert_eq!(names, ["Charlie", "Alice", "Bob"]);
        assert!(users.windows(2).all(|pair| match pair {
            [first, second] => first.id().get() < second.id().get(),
            _ => true,
        }));
    });
}

#[rstest]
fn update_replaces_fields_and_keeps_created_at(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: update_replaces_fields_and_keeps_created_at skipped");
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        let created = repo
            .insert(&UserFields::new("Ana", "other", "Cobol"))
            .await
            .expect("insert succeeds");

        let updated = repo
            .update(created.id(), &UserFields::new("Ana", "php", ""))
            .await
            .expect("update succeeds")
            .expect("row exists");
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.language(), "php");
        assert_eq!(updated.other_language(), "");
        assert_eq!(updated.created_at(), created.created_at());
        assert!(updated.updated_at() > created.updated_at());

        let fetched = repo
            .find_by_id(created.id())
            .await
            .expect("find succeeds")
            .expect("user exists");
        assert_eq!(fetched, updated);
    });
}

#[rstest]
fn unknown_ids_are_absent(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_ids_are_absent skipped");
        return;
    };
    let repo = &ctx.repository;
    let id = UserId::new(99);

    ctx.runtime.block_on(async {
        assert!(repo.find_by_id(id).await.expect("find succeeds").is_none());
        assert!(
            repo.update(id, &UserFields::new("Ana", "ruby", ""))
                .await
                .expect("update succeeds")
                .is_none()
        );
        assert!(repo.list().await.expect("list succeeds").is_empty());
    });
}

#[rstest]
fn rerunning_migrations_is_a_no_op(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: rerunning_migrations_is_a_no_op skipped");
        return;
    };

    ctx.runtime
        .block_on(run_pending_migrations(&ctx.database_url))
        .expect("second migration run succeeds");
}

#[rstest]
fn missing_table_is_a_query_error(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_table_is_a_query_error skipped");
        return;
    };
    drop_users_table(&ctx.database_url).expect("drop succeeds");

    let result = ctx
        .runtime
        .block_on(ctx.repository.insert(&UserFields::new("Ana", "ruby", "")));

    assert!(
        matches!(result, Err(UserPersistenceError::Query { .. })),
        "expected Query error, got: {result:?}"
    );
}
