use serde::{Deserialize, Serialize};

use crate::userdb::{User, UserInput, UserStore};

use super::errors::CoordinationError;

/// Returned by [`delete_user`] in place of the removed record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    fn user_deleted() -> Self {
        Self {
            message: "User deleted successfully".to_string(),
        }
    }
}

fn validate_input(input: &UserInput) -> Result<(), CoordinationError> {
    if input.name.trim().is_empty() {
        return Err(CoordinationError::Validation("name must not be empty".to_string()).log());
    }
    if input.email.trim().is_empty() {
        return Err(CoordinationError::Validation("email must not be empty".to_string()).log());
    }
    Ok(())
}

/// Create a user; fails with `Conflict` when the email is already registered
pub async fn create_user(store: &UserStore, input: UserInput) -> Result<User, CoordinationError> {
    validate_input(&input)?;

    let user = store.insert_user(&input.name, &input.email).await?;

    Ok(user)
}

pub async fn get_user(store: &UserStore, id: i64) -> Result<User, CoordinationError> {
    Ok(store.get_user(id).await?)
}

/// List every user.
///
/// An empty collection is reported as `EmptyCollection` rather than an empty
/// list, which is what existing clients of this API expect.
pub async fn list_users(store: &UserStore) -> Result<Vec<User>, CoordinationError> {
    let users = store.get_all_users().await?;

    if users.is_empty() {
        return Err(CoordinationError::EmptyCollection("Users".to_string()).log());
    }

    Ok(users)
}

/// Replace name and email of an existing user
pub async fn update_user(
    store: &UserStore,
    id: i64,
    input: UserInput,
) -> Result<User, CoordinationError> {
    validate_input(&input)?;

    let user = store.update_user(id, &input.name, &input.email).await?;

    Ok(user)
}

pub async fn delete_user(store: &UserStore, id: i64) -> Result<DeleteConfirmation, CoordinationError> {
    store.delete_user(id).await?;

    Ok(DeleteConfirmation::user_deleted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_store;

    #[tokio::test]
    async fn test_create_then_duplicate_email() {
        let store = test_store().await;

        let ann = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        assert_eq!(
            ann,
            User {
                id: 1,
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
            }
        );

        let result = create_user(&store, UserInput::new("Bo", "ann@x.com")).await;
        assert_eq!(
            result,
            Err(CoordinationError::Conflict("ann@x.com".to_string()))
        );
        assert_eq!(list_users(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_two_and_list() {
        let store = test_store().await;
        let ann = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        let bo = create_user(&store, UserInput::new("Bo", "bo@x.com"))
            .await
            .unwrap();

        assert_eq!(ann.id, 1);
        assert_eq!(bo.id, 2);
        assert_eq!(list_users(&store).await.unwrap(), vec![ann, bo]);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = test_store().await;

        let err = get_user(&store, 99).await.unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "User not found: 99");
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let store = test_store().await;
        let ann = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();

        let updated = update_user(&store, ann.id, UserInput::new("Annie", "annie@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, ann.id);
        assert_eq!(updated.name, "Annie");
        assert_eq!(updated.email, "annie@x.com");
        assert_eq!(get_user(&store, ann.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = test_store().await;

        let err = update_user(&store, 42, UserInput::new("X", "x@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::ResourceNotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_onto_taken_email_is_conflict() {
        let store = test_store().await;
        create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        let bo = create_user(&store, UserInput::new("Bo", "bo@x.com"))
            .await
            .unwrap();

        let err = update_user(&store, bo.id, UserInput::new("Bo", "ann@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "email_conflict");
        assert_eq!(get_user(&store, bo.id).await.unwrap(), bo);
    }

    #[tokio::test]
    async fn test_delete_then_get_and_empty_list() {
        let store = test_store().await;
        let ann = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();

        let confirmation = delete_user(&store, ann.id).await.unwrap();
        assert_eq!(confirmation.message, "User deleted successfully");

        assert!(matches!(
            get_user(&store, ann.id).await,
            Err(CoordinationError::ResourceNotFound { .. })
        ));
        assert_eq!(
            list_users(&store).await,
            Err(CoordinationError::EmptyCollection("Users".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let store = test_store().await;

        assert!(matches!(
            delete_user(&store, 5).await,
            Err(CoordinationError::ResourceNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_list_is_not_found() {
        let store = test_store().await;

        let err = list_users(&store).await.unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "Users not found");
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_the_store() {
        let store = test_store().await;

        for input in [
            UserInput::new("", "ann@x.com"),
            UserInput::new("   ", "ann@x.com"),
            UserInput::new("Ann", ""),
            UserInput::new("Ann", " \t"),
        ] {
            let err = create_user(&store, input.clone()).await.unwrap_err();
            assert!(
                matches!(err, CoordinationError::Validation(_)),
                "{input:?} should be rejected"
            );
        }
        assert!(store.get_all_users().await.unwrap().is_empty());

        let ann = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        let err = update_user(&store, ann.id, UserInput::new("", "new@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::Validation(_)));
        assert_eq!(get_user(&store, ann.id).await.unwrap(), ann);
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reissued() {
        let store = test_store().await;
        let first = create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        let second = create_user(&store, UserInput::new("Bo", "bo@x.com"))
            .await
            .unwrap();
        delete_user(&store, second.id).await.unwrap();

        let third = create_user(&store, UserInput::new("Cy", "cy@x.com"))
            .await
            .unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[tokio::test]
    async fn test_unreachable_store_is_a_database_error() {
        let store = test_store().await;
        create_user(&store, UserInput::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        store.close().await;

        let err = create_user(&store, UserInput::new("Bo", "bo@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::Database(_)), "{err:?}");

        let err = list_users(&store).await.unwrap_err();
        assert!(matches!(err, CoordinationError::Database(_)), "{err:?}");
        assert_eq!(err.code(), "storage_error");

        let err = get_user(&store, 1).await.unwrap_err();
        assert!(matches!(err, CoordinationError::Database(_)), "{err:?}");
    }
}
