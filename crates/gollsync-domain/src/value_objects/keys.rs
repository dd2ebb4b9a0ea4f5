//! Store key derivation
//!
//! Every key the adapter touches is derived here:
//!
//! | Purpose | Layout |
//! |---------|--------|
//! | tenant lock | `{namespace}.{escaped tenant}.lock` |
//! | status slot | `{namespace}.data` |
//!
//! The status slot does not carry the tenant key, so every tenant of a
//! namespace shares it.

use crate::constants::{KEY_SEPARATOR, LOCK_KEY_SUFFIX, STATUS_KEY_SUFFIX};

/// Escape a tenant key for use as a store key segment
///
/// Query-component encoding: ASCII alphanumerics and `-_.~` are kept,
/// a space becomes `+` and every other byte becomes `%XX` (uppercase).
///
/// ```
/// use gollsync_domain::value_objects::escape_tenant_key;
///
/// assert_eq!(escape_tenant_key("acme corp/eu"), "acme+corp%2Feu");
/// ```
pub fn escape_tenant_key(tenant_key: &str) -> String {
    // urlencoding never emits a literal space, so `%20` only comes from one
    urlencoding::encode(tenant_key).replace("%20", "+")
}

/// Keys derived from one adapter namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceKeys {
    namespace: String,
    status_key: String,
}

impl NamespaceKeys {
    /// Create the key set for a namespace
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        let namespace = namespace.into();
        let status_key = format!("{namespace}{KEY_SEPARATOR}{STATUS_KEY_SUFFIX}");
        Self {
            namespace,
            status_key,
        }
    }

    /// The namespace prefix
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key of the shared status slot
    pub fn status_key(&self) -> &str {
        &self.status_key
    }

    /// Lock key for a tenant
    pub fn lock_key(&self, tenant_key: &str) -> String {
        self.tenant_key(tenant_key, LOCK_KEY_SUFFIX)
    }

    fn tenant_key(&self, tenant_key: &str, postfix: &str) -> String {
        format!(
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{postfix}",
            self.namespace,
            escape_tenant_key(tenant_key)
        )
    }
}
