//! Integration tests for the Users domain
//!
//! These use real PostgreSQL via testcontainers to check that the schema
//! enforces what the in-memory repository emulates:
//! - email uniqueness through the unique index
//! - identifier uniqueness through the primary key
//! - case-insensitive name search
//!
//! Run with `cargo test -- --ignored` (requires Docker).

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn user(builder: &TestDataBuilder, name: &str, local: &str) -> User {
    User::new(
        Uuid::now_v7(),
        name.to_string(),
        builder.email(local),
        "hashed".to_string(),
        Role::Normal,
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_and_get");

    let created = repo.create(user(&builder, "Ana", "ana")).await.unwrap();

    let fetched = assert_some(repo.get_by_id(created.id).await.unwrap(), "user by id");
    assert_uuid_eq(fetched.id, created.id, "fetched user id");
    assert_eq!(fetched.role, Role::Normal);

    let by_email = assert_some(
        repo.get_by_email(&builder.email("ana")).await.unwrap(),
        "user by email",
    );
    assert_uuid_eq(by_email.id, created.id, "user by email id");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_email_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_unique_email");

    repo.create(user(&builder, "Ana", "ana")).await.unwrap();
    let result = repo.create(user(&builder, "Other", "ana")).await;

    assert!(matches!(result, Err(UserError::AlreadyExists(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_id_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_unique_id");

    let first = repo.create(user(&builder, "Ana", "ana")).await.unwrap();
    let mut second = user(&builder, "Bob", "bob");
    second.id = first.id;

    let result = repo.create(second).await;
    assert!(matches!(result, Err(UserError::AlreadyExists(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_name_and_list() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_find_by_name");

    repo.create(user(&builder, "Ana Maria", "ana")).await.unwrap();
    repo.create(user(&builder, "Mariana", "mariana")).await.unwrap();
    repo.create(user(&builder, "Bob", "bob")).await.unwrap();

    assert_eq!(repo.find_by_name("BOB").await.unwrap().len(), 1);
    assert_eq!(repo.find_by_name("ana").await.unwrap().len(), 2);
    assert!(repo.find_by_name("100%").await.unwrap().is_empty());
    assert_eq!(repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update_delete");

    let mut created = repo.create(user(&builder, "Ana", "ana")).await.unwrap();
    created.name = "Ana Clara".to_string();
    let updated = repo.update(created.clone()).await.unwrap();
    assert_eq!(updated.name, "Ana Clara");

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());

    let missing = repo.update(user(&builder, "Ghost", "ghost")).await;
    assert!(matches!(missing, Err(UserError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_signup_and_login_against_postgres() {
    use axum_helpers::auth::{JwtConfig, TokenManager};

    let db = TestDatabase::new().await;
    let tokens = TokenManager::new(&JwtConfig::new("integration-secret-with-32-plus-chars"));
    let service = UserService::new(PgUserRepository::new(db.connection()), tokens);

    let signup = SignupRequest {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "abc".to_string(),
        role: None,
    };
    service.create_user(signup.clone()).await.unwrap();

    let duplicate = service.create_user(signup).await;
    assert!(matches!(duplicate, Err(UserError::AlreadyExists(_))));

    let login = service
        .login_user(LoginRequest {
            email: "ana@x.com".to_string(),
            password: "abc".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(login.name, "Ana");
}
