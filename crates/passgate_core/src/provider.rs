use crate::constants::{fields, providers};
use crate::traits::CredentialsAuthorizer;

use serde::Serialize;

/// Login form metadata for a single credential field.
///
/// Purely presentational. The server never validates input against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub input_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl CredentialField {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        input_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_type: input_type.into(),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A "Credentials" provider: display metadata plus the `authorize` callback.
#[derive(Debug, Clone)]
pub struct CredentialsProvider<A: CredentialsAuthorizer> {
    id: String,
    name: String,
    fields: Vec<CredentialField>,
    authorizer: A,
}

impl<A: CredentialsAuthorizer> CredentialsProvider<A> {
    /// Creates the provider with the default id, name and username/password fields.
    pub fn new(authorizer: A) -> Self {
        Self {
            id: providers::CREDENTIALS_ID.to_string(),
            name: providers::CREDENTIALS_NAME.to_string(),
            fields: vec![
                CredentialField::new(fields::USERNAME, "Username", "text").with_placeholder("jsmith"),
                CredentialField::new(fields::PASSWORD, "Password", "password"),
            ],
            authorizer,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the field with the same name, or appends it.
    pub fn with_field(mut self, field: CredentialField) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[CredentialField] {
        &self.fields
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }
}
