//! Session tests that run without a live database.
//!
//! Handler round-trips that need real rows live in `crates/db/tests/` and
//! only run against a provided Postgres instance.  Here the database is a
//! lazily-constructed pool that has never dialed the server, which is enough
//! to exercise the menu loop, the quit path, and the error policy.

use sqlx::postgres::PgPoolOptions;

use crate::action::MenuAction;
use crate::mock::{Answer, MockPrompt};
use crate::{Session, TrackerError};

/// A pool that has never dialed the server.  Paths that quit before touching
/// the database never notice; paths that do touch it get a transport error.
fn unreachable_pool() -> db::DbPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy("postgres://postgres@127.0.0.1:9/unreachable")
        .expect("constructing a lazy pool does not touch the network")
}

fn position(action: MenuAction) -> usize {
    MenuAction::ALL
        .iter()
        .position(|candidate| *candidate == action)
        .expect("action is in the menu")
}

#[tokio::test]
async fn quitting_ends_the_session_cleanly() {
    let prompt = MockPrompt::new(vec![Answer::Selection(position(MenuAction::Quit))]);
    let mut session = Session::new(unreachable_pool(), prompt);

    assert!(session.run().await.is_ok());
}

#[tokio::test]
async fn exhausted_input_ends_the_session_with_an_error() {
    let prompt = MockPrompt::new(vec![]);
    let mut session = Session::new(unreachable_pool(), prompt);

    let err = session.run().await.unwrap_err();
    assert!(matches!(err, TrackerError::InputClosed));
}

#[tokio::test]
async fn unreachable_server_ends_the_session_with_an_error() {
    // The report handler is the first thing to touch the connection; with an
    // unreachable server that failure is transport-level, so the loop must
    // not resume.
    let prompt = MockPrompt::new(vec![Answer::Selection(position(MenuAction::ViewDepartments))]);
    let mut session = Session::new(unreachable_pool(), prompt);

    assert!(session.run().await.is_err());
}

#[test]
fn statement_failures_are_recoverable_transport_failures_are_not() {
    let statement = TrackerError::Database(db::DbError::NotFound);
    assert!(statement.is_recoverable());

    let transport = TrackerError::Database(db::DbError::from(sqlx::Error::PoolClosed));
    assert!(!transport.is_recoverable());

    assert!(!TrackerError::InputClosed.is_recoverable());
}
