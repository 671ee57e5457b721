use tracing::info;

use crate::domain::{
    allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    jwt::ports::JwtSigner,
    scan::ports::{LabelTranscriber, ScanRepository},
    user::{
        entities::User,
        ports::{AccountService, UserRepository},
        value_objects::{AuthenticatedUser, LoginInput, RegisterUserInput},
    },
};

impl<U, H, J, AP, SR, LT> AccountService for Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    async fn register(&self, input: RegisterUserInput) -> Result<AuthenticatedUser, CoreError> {
        let email = input.email.trim().to_lowercase();

        if self
            .user_repository
            .get_credential_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(User::new(email, input.name), password_hash)
            .await?;

        // Every account starts with an empty profile.
        self.allergy_profile_repository
            .create_if_absent(AllergyProfile::empty(user.id))
            .await?;

        let jwt = self.jwt_signer.sign(user.id)?;

        info!(user_id = %user.id, "user registered");

        Ok(AuthenticatedUser {
            token: jwt.token,
            user,
        })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthenticatedUser, CoreError> {
        let email = input.email.trim().to_lowercase();

        let credential = self
            .user_repository
            .get_credential_by_email(email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(input.password, credential.password_hash)
            .await?;

        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        let jwt = self.jwt_signer.sign(credential.user.id)?;

        Ok(AuthenticatedUser {
            token: jwt.token,
            user: credential.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        allergy_profile::ports::AllergyProfileRepository,
        authentication::ports::AuthService,
        common::entities::app_errors::CoreError,
        testing::{
            InMemoryAllergyProfileRepository, StaleReadUserRepository, service_with,
            test_service,
        },
        user::{
            ports::AccountService,
            value_objects::{LoginInput, RegisterUserInput},
        },
    };

    fn register_input(email: &str) -> RegisterUserInput {
        RegisterUserInput {
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_empty_profile_and_token() {
        let service = test_service();

        let registered = service.register(register_input("ada@example.com")).await.unwrap();

        let profile = service
            .allergy_profile_repository
            .get_by_user_id(registered.user.id)
            .await
            .unwrap()
            .unwrap();
        assert!(profile.allergens.is_empty());
        assert!(profile.custom_allergens.is_empty());

        let identity = service.authorize_request(&registered.token).unwrap();
        assert_eq!(identity.id(), registered.user.id);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let service = test_service();

        service.register(register_input("ada@example.com")).await.unwrap();
        let result = service.register(register_input(" ADA@example.com")).await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_login_verifies_password() {
        let service = test_service();
        let registered = service.register(register_input("ada@example.com")).await.unwrap();

        let logged_in = service
            .login(LoginInput {
                email: "ada@example.com".to_string(),
                password: "correct horse battery staple".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);

        let wrong_password = service
            .login(LoginInput {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await;
        assert_eq!(wrong_password, Err(CoreError::InvalidCredentials));

        let unknown = service
            .login(LoginInput {
                email: "bob@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await;
        assert_eq!(unknown, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_duplicate_caught_at_insert_is_already_exists() {
        let service = service_with(
            StaleReadUserRepository::default(),
            InMemoryAllergyProfileRepository::default(),
        );

        service.register(register_input("ada@example.com")).await.unwrap();
        let result = service.register(register_input("ada@example.com")).await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
    }
}
