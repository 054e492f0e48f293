//! Provider tags and the references they introduce.
//!
//! The inner text of a placeholder is classified by a fixed prefix. The set of
//! prefixes is closed: adding a provider means adding a [`ProviderTag`] variant
//! and the matching [`ProviderReference`] arm.

/// Identifies which external store resolves a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderTag {
    /// AWS Systems Manager Parameter Store.
    Ssm,
    /// AWS Secrets Manager.
    SecretsManager,
}

impl ProviderTag {
    /// Every supported tag, in matching order.
    pub const ALL: [Self; 2] = [Self::Ssm, Self::SecretsManager];

    /// The literal prefix that introduces this provider inside a placeholder.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Ssm => "aws:ssm:",
            Self::SecretsManager => "aws:secretsmanager:",
        }
    }

    /// Short provider name, as used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ssm => "ssm",
            Self::SecretsManager => "secretsmanager",
        }
    }

    /// Splits `inner` into a tag and the remainder after its prefix.
    #[must_use]
    pub fn classify(inner: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|tag| inner.strip_prefix(tag.prefix()).map(|rest| (tag, rest)))
    }
}

/// A decoded placeholder that names a value in one of the providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReference {
    /// A parameter store lookup.
    Parameter {
        /// Path expression yielding the parameter name.
        path: String,
    },
    /// A secret store lookup.
    Secret {
        /// Path expression yielding the secret identifier.
        path: String,
        /// Field to extract from a JSON payload; `None` returns the whole payload.
        field: Option<String>,
    },
}

impl ProviderReference {
    /// Decodes the inner text of a placeholder (braces already stripped).
    ///
    /// Returns `None` when no known provider prefix is present, in which case
    /// the placeholder is not ours and must be left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tplr_domain::ProviderReference;
    ///
    /// let reference = ProviderReference::parse("aws:secretsmanager:/db#Password");
    /// assert_eq!(
    ///     reference,
    ///     Some(ProviderReference::Secret {
    ///         path: "/db".to_string(),
    ///         field: Some("Password".to_string()),
    ///     })
    /// );
    /// assert_eq!(ProviderReference::parse("user.name"), None);
    /// ```
    #[must_use]
    pub fn parse(inner: &str) -> Option<Self> {
        let (tag, rest) = ProviderTag::classify(inner)?;
        Some(match tag {
            ProviderTag::Ssm => Self::Parameter {
                path: rest.to_string(),
            },
            ProviderTag::SecretsManager => {
                let (path, field) = match rest.split_once('#') {
                    Some((path, key)) => (path, Some(key).filter(|key| !key.is_empty())),
                    None => (rest, None),
                };
                Self::Secret {
                    path: path.to_string(),
                    field: field.map(str::to_string),
                }
            }
        })
    }

    /// The tag this reference was decoded from.
    #[must_use]
    pub const fn tag(&self) -> ProviderTag {
        match self {
            Self::Parameter { .. } => ProviderTag::Ssm,
            Self::Secret { .. } => ProviderTag::SecretsManager,
        }
    }

    /// The unevaluated path expression.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Parameter { path } | Self::Secret { path, .. } => path,
        }
    }
}
