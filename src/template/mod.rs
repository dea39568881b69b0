//! Handlebars binding for the vault fallback lookup.
//!
//! ```text
//! ssh_key: {{vault_fallback "keys/id_rsa"}}
//! ```
//!
//! renders the absolute path of `keys/id_rsa` or `keys/id_rsa.vault`,
//! whichever exists. The helper also works as a subexpression.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason,
    ScopedJson,
};
use serde_json::Value as Json;

use crate::fs_op::VaultResolver;

/// Name templates use to call the helper.
pub const VAULT_FALLBACK: &str = "vault_fallback";

/// `{{vault_fallback <logical path>}}`
pub struct VaultFallbackHelper {
    resolver: VaultResolver,
}

impl VaultFallbackHelper {
    pub fn new(resolver: VaultResolver) -> Self {
        VaultFallbackHelper { resolver }
    }
}

impl HelperDef for VaultFallbackHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(VAULT_FALLBACK, 0))?;
        let logical = param
            .value()
            .as_str()
            .ok_or(RenderErrorReason::InvalidParamType("string"))?;

        let resolved = self.resolver.resolve(logical).map_err(|e| {
            tracing::warn!(logical, error = %e, "vault_fallback failed");
            RenderError::from(RenderErrorReason::Other(e.to_string()))
        })?;
        let resolved = resolved.to_str().ok_or_else(|| {
            RenderErrorReason::Other(format!(
                "resolved path is not valid UTF-8: {}",
                resolved.display()
            ))
        })?;
        Ok(ScopedJson::Derived(Json::String(resolved.to_owned())))
    }
}

/// Every helper this crate provides, keyed by template name.
pub fn filters(resolver: VaultResolver) -> Vec<(&'static str, Box<dyn HelperDef + Send + Sync>)> {
    vec![(VAULT_FALLBACK, Box::new(VaultFallbackHelper::new(resolver)))]
}

/// Register all helpers from [`filters`] on `registry`.
pub fn register(registry: &mut Handlebars<'_>, resolver: VaultResolver) {
    for (name, helper) in filters(resolver) {
        registry.register_helper(name, helper);
    }
}
