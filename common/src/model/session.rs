use crate::model::advert::{AdvertCertificate, AdvertEvaluation};
use crate::model::lookup::UserMessage;
use crate::model::permit::{PermitCertificate, PermitEvaluation, PermitResolution};
use serde::{Deserialize, Serialize};

/// Everything one user session has produced so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub permit_evaluation: Option<PermitEvaluation>,
    pub permit_resolution: Option<PermitResolution>,
    pub permit_certificate: Option<PermitCertificate>,
    pub advert_evaluation: Option<AdvertEvaluation>,
    pub advert_certificate: Option<AdvertCertificate>,
    pub lookup_message: Option<UserMessage>,
}
