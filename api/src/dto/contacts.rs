use serde::{Deserialize, Serialize};
use validator::Validate;

use pb_core::domain::entities::{ContactPatch, NewContact};
use pb_shared::validation::{EMAIL_DOMAIN_PATTERN, PHONE_PATTERN};

/// Body of a new contact; every field is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewContactRequest {
    #[validate(required, length(min = 3, max = 30))]
    pub name: Option<String>,

    #[validate(required, email, regex(path = *EMAIL_DOMAIN_PATTERN))]
    pub email: Option<String>,

    #[validate(required, length(min = 3, max = 15), regex(path = *PHONE_PATTERN))]
    pub phone: Option<String>,
}

impl From<NewContactRequest> for NewContact {
    fn from(request: NewContactRequest) -> Self {
        NewContact {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            favorite: false,
        }
    }
}

/// Body of a contact replacement; fields are optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactFieldsPatch {
    #[validate(length(min = 3, max = 30))]
    pub name: Option<String>,

    #[validate(email, regex(path = *EMAIL_DOMAIN_PATTERN))]
    pub email: Option<String>,

    #[validate(length(min = 3, max = 15), regex(path = *PHONE_PATTERN))]
    pub phone: Option<String>,
}

impl From<ContactFieldsPatch> for ContactPatch {
    fn from(request: ContactFieldsPatch) -> Self {
        ContactPatch {
            name: request.name,
            email: request.email,
            phone: request.phone,
            favorite: None,
        }
    }
}
