use std::sync::Arc;

use tracing::{error, info, instrument};

use super::conversion::{to_user, to_user_response};
use super::domain::{User, UserRequest, UserResponse};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use crate::messages;
use crate::password::{decode_password, encode_password};

/// Account workflows. New accounts start with `starting_wallet` credit.
pub struct UserService<R: UserRepository + ?Sized = dyn UserRepository> {
    repo: Arc<R>,
    starting_wallet: f64,
}

/// Response with the stored password decoded back to plain text.
fn decoded_response(user: &User) -> Result<UserResponse, ServiceError> {
    let mut resp = to_user_response(user);
    resp.user_password = user.user_password.as_deref().map(decode_password).transpose()?;
    Ok(resp)
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>, starting_wallet: f64) -> Self { Self { repo, starting_wallet } }

    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::users::UserService;
    /// use service::users::domain::UserRequest;
    /// use service::users::repository::mock::MockUserRepository;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()), 1000.0);
    /// let req = UserRequest { user_email: Some("a@b.com".into()), user_password: Some("pw".into()), ..Default::default() };
    /// let user = tokio_test::block_on(svc.add_user(req)).unwrap();
    /// assert_eq!(user.wallet, Some(1000.0));
    /// ```
    #[instrument(skip(self, request), fields(email = ?request.user_email))]
    pub async fn add_user(&self, request: UserRequest) -> Result<UserResponse, ServiceError> {
        info!("adding user");
        let email = request
            .user_email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ServiceError::Validation(messages::EMAIL_REQUIRED.into()))?;

        if self.repo.exists_by_user_email_ignore_case(email).await? {
            error!("email already registered");
            return Err(ServiceError::already_exists(messages::EMAIL_ALREADY_EXISTS));
        }

        let mut user = to_user(&request);
        user.user_password = request.user_password.as_deref().map(encode_password);
        user.wallet = Some(self.starting_wallet);
        let saved = self.repo.save(user).await?;
        info!(user_id = ?saved.user_id, "user added");
        decoded_response(&saved)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<UserResponse, ServiceError> {
        let user = self.repo.find_by_id(user_id).await?.ok_or_else(|| ServiceError::not_found(messages::USER_NOT_FOUND))?;
        decoded_response(&user)
    }

    /// Overwrite the fields present in `request`, re-encoding a new password.
    /// The wallet is never touched here.
    #[instrument(skip(self, request))]
    pub async fn update_user(&self, user_id: i64, request: UserRequest) -> Result<UserResponse, ServiceError> {
        let Some(mut user) = self.repo.find_by_id(user_id).await? else {
            error!("user not found");
            return Err(ServiceError::not_found(messages::USER_NOT_FOUND));
        };
        let UserRequest { user_name, user_password, phone_number, user_email, user_role } = request;
        user.user_name = user_name.or(user.user_name);
        user.user_password = user_password.as_deref().map(encode_password).or(user.user_password);
        user.phone_number = phone_number.or(user.phone_number);
        user.user_email = user_email.or(user.user_email);
        user.user_role = user_role.or(user.user_role);

        let updated = self.repo.save(user).await?;
        info!("user updated");
        decoded_response(&updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(user_id).await? {
            error!("user not found");
            return Err(ServiceError::not_found(messages::USER_NOT_FOUND));
        }
        self.repo.delete_by_id(user_id).await?;
        info!("user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::MockUserRepository;

    fn service() -> (UserService, Arc<MockUserRepository>) {
        let repo = Arc::new(MockUserRepository::default());
        let shared: Arc<dyn UserRepository> = repo.clone();
        (UserService::new(shared, 1000.0), repo)
    }

    fn request(email: &str) -> UserRequest {
        UserRequest {
            user_name: Some("Ada".into()),
            user_password: Some("s3cret".into()),
            phone_number: Some("555".into()),
            user_email: Some(email.into()),
            user_role: Some("CUSTOMER".into()),
        }
    }

    #[tokio::test]
    async fn password_is_stored_encoded_and_returned_plain() {
        let (svc, repo) = service();
        let created = svc.add_user(request("ada@example.com")).await.unwrap();
        assert_eq!(created.user_password.as_deref(), Some("s3cret"));
        assert_eq!(created.wallet, Some(1000.0));

        let id = created.user_id.unwrap();
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.user_password, Some(encode_password("s3cret")));
        assert_eq!(svc.get_user_by_id(id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn email_is_unique_ignoring_case() {
        let (svc, _) = service();
        svc.add_user(request("ada@example.com")).await.unwrap();
        let err = svc.add_user(request("ADA@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref m) if m == "Email already exists"));
    }

    #[tokio::test]
    async fn missing_email_is_a_validation_error() {
        let (svc, _) = service();
        let err = svc.add_user(UserRequest { user_email: Some("  ".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_reencodes_password_and_keeps_wallet() {
        let (svc, repo) = service();
        let id = svc.add_user(request("ada@example.com")).await.unwrap().user_id.unwrap();
        let patch = UserRequest { user_password: Some("n3w".into()), ..Default::default() };
        let updated = svc.update_user(id, patch).await.unwrap();
        assert_eq!(updated.user_password.as_deref(), Some("n3w"));
        assert_eq!(updated.user_name.as_deref(), Some("Ada"));
        assert_eq!(updated.wallet, Some(1000.0));
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().user_password, Some(encode_password("n3w")));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (svc, repo) = service();
        let kept = svc.add_user(request("ada@example.com")).await.unwrap();
        let stored = repo.find_by_id(kept.user_id.unwrap()).await.unwrap();
        for err in [
            svc.get_user_by_id(5).await.unwrap_err(),
            svc.update_user(5, UserRequest::default()).await.unwrap_err(),
            svc.delete_user(5).await.unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "User not found");
        }
        assert!(repo.find_by_id(5).await.unwrap().is_none());
        assert_eq!(repo.find_by_id(kept.user_id.unwrap()).await.unwrap(), stored);
        assert_eq!(svc.get_user_by_id(kept.user_id.unwrap()).await.unwrap(), kept);
    }
}
