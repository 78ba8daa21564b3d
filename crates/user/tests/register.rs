use std::sync::Arc;

use scorehub_user::{Command, Error, LoginInput, RegisterInput};
use temp_dir::TempDir;
use tokio::sync::Barrier;
use tokio::task::JoinSet;

mod helpers;

#[tokio::test]
async fn test_register_then_login() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command::new(pool.clone());

    cmd.register(RegisterInput {
        username: "john.doe".to_owned(),
        password: "my_password".to_owned(),
    })
    .await?;

    let username = cmd
        .login(LoginInput {
            username: "john.doe".to_owned(),
            password: "my_password".to_owned(),
        })
        .await?;

    assert_eq!(username, "john.doe");

    Ok(())
}

#[tokio::test]
async fn test_register_duplicate_keeps_stored_hash() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command::new(pool.clone());

    cmd.register(RegisterInput {
        username: "john.doe".to_owned(),
        password: "my_password".to_owned(),
    })
    .await?;

    let stored = scorehub_user::repository::find_by_username(&pool, "john.doe")
        .await?
        .unwrap();

    let resp = cmd
        .register(RegisterInput {
            username: "john.doe".to_owned(),
            password: "another_password".to_owned(),
        })
        .await;

    assert!(matches!(resp.unwrap_err(), Error::UsernameTaken));

    // The conflicting signup must not have touched the original credential
    let unchanged = scorehub_user::repository::find_by_username(&pool, "john.doe")
        .await?
        .unwrap();
    assert_eq!(unchanged.password_hash, stored.password_hash);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?1")
        .bind("john.doe")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count.0, 1);

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command::new(pool);

    let resp = cmd
        .register(RegisterInput {
            username: "jo".to_owned(),
            password: "my_password".to_owned(),
        })
        .await;
    assert!(matches!(resp.unwrap_err(), Error::Validate(_)));

    let resp = cmd
        .register(RegisterInput {
            username: "john.doe".to_owned(),
            password: "short".to_owned(),
        })
        .await;
    assert!(matches!(resp.unwrap_err(), Error::Validate(_)));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_single_winner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    let attempts = 8;
    let barrier = Arc::new(Barrier::new(attempts));
    let mut set = JoinSet::new();

    for _ in 0..attempts {
        let cmd = Command::new(pool.clone());
        let barrier = barrier.clone();

        set.spawn(async move {
            barrier.wait().await;
            cmd.register(RegisterInput {
                username: "racer".to_owned(),
                password: "my_password".to_owned(),
            })
            .await
        });
    }

    let mut created = 0;
    let mut conflicts = 0;
    while let Some(resp) = set.join_next().await {
        match resp? {
            Ok(()) => created += 1,
            Err(Error::UsernameTaken) => conflicts += 1,
            Err(err) => anyhow::bail!("unexpected register error: {err}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, attempts - 1);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?1")
        .bind("racer")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count.0, 1);

    Ok(())
}
