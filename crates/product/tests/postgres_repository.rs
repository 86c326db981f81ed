//! Runs the Postgres repositories against a scratch database created per test
//! by `sqlx::test` from `DATABASE_URL`. Ignored by default:
//! `DATABASE_URL=postgres://… cargo test -p product -- --ignored`.

use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
};
use shared::errors::RepositoryError;
use sqlx::PgPool;

fn new_product(name: &str, price: i64) -> CreateProductRequest {
    CreateProductRequest {
        id: None,
        name: name.to_string(),
        description: None,
        price,
    }
}

fn repositories(pool: PgPool) -> (ProductQueryRepository, ProductCommandRepository) {
    (
        ProductQueryRepository::new(pool.clone()),
        ProductCommandRepository::new(pool),
    )
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs DATABASE_URL"]
async fn find_by_name_returns_lowest_id_among_equal_names(pool: PgPool) {
    let (query, command) = repositories(pool);

    let first = command.create_product(&new_product("Burger", 500)).await.unwrap();
    command.create_product(&new_product("Fries", 200)).await.unwrap();
    let second = command.create_product(&new_product("Burger", 650)).await.unwrap();
    assert!(second.id > first.id);

    let found = query.find_by_name("Burger").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.price, 500);

    assert!(query.find_by_name("burger").await.unwrap().is_none());
    assert!(query.find_by_name(&first.id.to_string()).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs DATABASE_URL"]
async fn bulk_delete_counts_only_matching_rows(pool: PgPool) {
    let (query, command) = repositories(pool);

    let burger = command.create_product(&new_product("Burger", 500)).await.unwrap();
    let fries = command.create_product(&new_product("Fries", 200)).await.unwrap();

    let removed = command
        .delete_products(&[burger.id, 9_999, burger.id])
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let remaining: Vec<i32> = query
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(remaining, vec![fries.id]);

    assert_eq!(command.delete_products(&[9_999]).await.unwrap(), 0);
    assert_eq!(command.delete_products(&[]).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs DATABASE_URL"]
async fn bulk_create_rolls_back_when_one_insert_fails(pool: PgPool) {
    let (query, command) = repositories(pool);

    let batch = [new_product("Burger", 500), new_product("Shake", -1)];
    let err = command.create_products(&batch).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Sqlx(_)));

    assert!(query.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs DATABASE_URL"]
async fn update_of_missing_row_is_not_found(pool: PgPool) {
    let (query, command) = repositories(pool);

    let burger = command.create_product(&new_product("Burger", 500)).await.unwrap();

    let updated = command
        .update_product(&UpdateProductRequest {
            id: burger.id,
            name: "Cheeseburger".to_string(),
            description: Some("with cheddar".to_string()),
            price: 700,
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Cheeseburger");
    assert_eq!(query.find_by_id(burger.id).await.unwrap(), Some(updated));

    let err = command
        .update_product(&UpdateProductRequest {
            id: 9_999,
            name: "Ghost".to_string(),
            description: None,
            price: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
    assert!(!query.exists(9_999).await.unwrap());
}
