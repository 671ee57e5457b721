use crate::domain::{
    allergy_profile::ports::AllergyProfileRepository,
    authentication::{ports::AuthService, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    jwt::ports::JwtSigner,
    scan::ports::{LabelTranscriber, ScanRepository},
    user::ports::UserRepository,
};

impl<U, H, J, AP, SR, LT> AuthService for Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    fn authorize_request(&self, token: &str) -> Result<Identity, CoreError> {
        let claims = self.jwt_signer.verify(token)?;

        Ok(Identity::new(claims.sub))
    }
}
